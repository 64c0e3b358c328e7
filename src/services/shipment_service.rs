use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use crate::{
    dto::shipments::{CreateShipmentRequest, ShipmentList, ShipmentWithMovements},
    entity::{
        product_movements::{
            ActiveModel as MovementActive, Column as MovementCol, Entity as ProductMovements,
            Model as MovementModel,
        },
        shipments::{
            ActiveModel as ShipmentActive, Column as ShipmentCol, Entity as Shipments,
            Model as ShipmentModel,
        },
    },
    error::{AppError, AppResult},
    models::{ProductMovement, Shipment},
    response::{ApiResponse, Meta},
    routes::params::{ShipmentListQuery, SortOrder},
    state::AppState,
};

pub const SHIPMENT_STATUSES: [&str; 4] = ["Pending", "In Transit", "Received", "Cancelled"];
pub const MOVEMENT_TYPES: [&str; 3] = ["Shipped", "Received", "Transferred"];

pub async fn list_shipments(
    state: &AppState,
    query: ShipmentListQuery,
) -> AppResult<ApiResponse<ShipmentList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(ShipmentCol::Status.eq(status.clone()));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let mut finder = Shipments::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(ShipmentCol::DeliveryDate),
        SortOrder::Desc => finder.order_by_desc(ShipmentCol::DeliveryDate),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(shipment_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Shipments",
        ShipmentList { items },
        Some(meta),
    ))
}

pub async fn get_shipment(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<ShipmentWithMovements>> {
    let shipment = Shipments::find_by_id(id).one(&state.orm).await?;
    let shipment = match shipment {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let movements = ProductMovements::find()
        .filter(MovementCol::ShipmentId.eq(shipment.id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(movement_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Shipment",
        ShipmentWithMovements {
            shipment: shipment_from_entity(shipment),
            movements,
        },
        Some(Meta::empty()),
    ))
}

/// Insert a shipment and its product movements in one transaction.
pub async fn create_shipment(
    state: &AppState,
    payload: CreateShipmentRequest,
) -> AppResult<ApiResponse<ShipmentWithMovements>> {
    if !SHIPMENT_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "status must be one of {:?}",
            SHIPMENT_STATUSES
        )));
    }
    for movement in &payload.movements {
        if !MOVEMENT_TYPES.contains(&movement.movement_type.as_str()) {
            return Err(AppError::BadRequest(format!(
                "movement_type must be one of {:?}",
                MOVEMENT_TYPES
            )));
        }
        if movement.quantity <= 0 {
            return Err(AppError::BadRequest(
                "movement quantity must be positive".into(),
            ));
        }
    }

    let txn = state.orm.begin().await?;

    let shipment = ShipmentActive {
        id: NotSet,
        supplier_id: Set(payload.supplier_id),
        warehouse_id: Set(payload.warehouse_id),
        delivery_date: Set(payload.delivery_date),
        status: Set(payload.status),
        weight: Set(payload.weight),
    };
    let shipment = match shipment.insert(&txn).await {
        Ok(s) => s,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::BadRequest(
                    "unknown supplier_id or warehouse_id".into(),
                ));
            }
            return Err(err.into());
        }
    };

    let mut movements: Vec<ProductMovement> = Vec::new();
    for movement in &payload.movements {
        let active = MovementActive {
            id: NotSet,
            shipment_id: Set(shipment.id),
            product_id: Set(movement.product_id),
            warehouse_id: Set(movement.warehouse_id),
            quantity: Set(movement.quantity),
            movement_type: Set(movement.movement_type.clone()),
        };
        let inserted = match active.insert(&txn).await {
            Ok(m) => m,
            Err(err) => {
                if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::BadRequest(
                        "unknown product or warehouse in movement".into(),
                    ));
                }
                return Err(err.into());
            }
        };
        movements.push(movement_from_entity(inserted));
    }

    txn.commit().await?;

    tracing::info!(
        shipment_id = shipment.id,
        movements = movements.len(),
        "shipment created"
    );

    Ok(ApiResponse::success(
        "Shipment created",
        ShipmentWithMovements {
            shipment: shipment_from_entity(shipment),
            movements,
        },
        Some(Meta::empty()),
    ))
}

/// Deleting a shipment cascades to its product movements.
pub async fn delete_shipment(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Shipments::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(shipment_id = id, "shipment deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn shipment_from_entity(model: ShipmentModel) -> Shipment {
    Shipment {
        id: model.id,
        supplier_id: model.supplier_id,
        warehouse_id: model.warehouse_id,
        delivery_date: model.delivery_date,
        status: model.status,
        weight: model.weight,
    }
}

fn movement_from_entity(model: MovementModel) -> ProductMovement {
    ProductMovement {
        id: model.id,
        shipment_id: model.shipment_id,
        product_id: model.product_id,
        warehouse_id: model.warehouse_id,
        quantity: model.quantity,
        movement_type: model.movement_type,
    }
}
