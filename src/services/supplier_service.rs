use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::{
    dto::suppliers::{CreateSupplierRequest, SupplierList},
    entity::suppliers::{
        ActiveModel as SupplierActive, Column as SupplierCol, Entity as Suppliers,
        Model as SupplierModel,
    },
    error::{AppError, AppResult},
    models::Supplier,
    response::{ApiResponse, Meta},
    routes::params::{SortOrder, SupplierQuery},
    state::AppState,
};

pub async fn list_suppliers(
    state: &AppState,
    query: SupplierQuery,
) -> AppResult<ApiResponse<SupplierList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut condition = Condition::all();
    if let Some(region) = query.region.as_ref().filter(|r| !r.is_empty()) {
        condition = condition.add(SupplierCol::Region.eq(region.clone()));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Asc);
    let mut finder = Suppliers::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(SupplierCol::Name),
        SortOrder::Desc => finder.order_by_desc(SupplierCol::Name),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(supplier_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Suppliers",
        SupplierList { items },
        Some(meta),
    ))
}

pub async fn get_supplier(state: &AppState, id: i32) -> AppResult<ApiResponse<Supplier>> {
    let supplier = Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(supplier_from_entity);
    let supplier = match supplier {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Supplier", supplier, None))
}

pub async fn create_supplier(
    state: &AppState,
    payload: CreateSupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    let active = SupplierActive {
        id: NotSet,
        name: Set(payload.name),
        region: Set(payload.region),
        phone: Set(payload.phone),
        email: Set(payload.email),
    };
    let supplier = active.insert(&state.orm).await?;

    tracing::info!(supplier_id = supplier.id, "supplier created");

    Ok(ApiResponse::success(
        "Supplier created",
        supplier_from_entity(supplier),
        Some(Meta::empty()),
    ))
}

/// Deleting a supplier cascades to its orders and shipments (and through
/// them to order details and product movements). The delete is rejected
/// while any non-cascading reference remains, e.g. a product it supplies.
pub async fn delete_supplier(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Suppliers::delete_by_id(id).exec(&state.orm).await;

    let result = match result {
        Ok(res) => res,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::Conflict(
                    "supplier is still referenced by products".into(),
                ));
            }
            return Err(err.into());
        }
    };

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(supplier_id = id, "supplier deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn supplier_from_entity(model: SupplierModel) -> Supplier {
    Supplier {
        id: model.id,
        name: model.name,
        region: model.region,
        phone: model.phone,
        email: model.email,
    }
}
