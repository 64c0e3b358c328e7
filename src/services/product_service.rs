use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList},
    entity::products::{
        ActiveModel as ProductActive, Column as ProdCol, Entity as Products, Model as ProductModel,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(ProdCol::Name.contains(search.clone()));
    }

    if let Some(category) = query.category.as_ref().filter(|c| !c.is_empty()) {
        condition = condition.add(ProdCol::Category.eq(category.clone()));
    }

    if let Some(min_price) = query.min_price {
        condition = condition.add(ProdCol::UnitPrice.gte(min_price));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(ProdCol::UnitPrice.lte(max_price));
    }

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::Name);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Asc);
    let sort_col = match sort_by {
        ProductSortBy::Name => ProdCol::Name,
        ProductSortBy::Category => ProdCol::Category,
        ProductSortBy::UnitPrice => ProdCol::UnitPrice,
    };

    let mut finder = Products::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if payload.unit_price < 0 {
        return Err(AppError::BadRequest("unit_price must not be negative".into()));
    }

    let active = ProductActive {
        id: NotSet,
        name: Set(payload.name),
        category: Set(payload.category),
        unit_price: Set(payload.unit_price),
        supplier_id: Set(payload.supplier_id),
    };
    let product = match active.insert(&state.orm).await {
        Ok(p) => p,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::BadRequest("unknown supplier_id".into()));
            }
            return Err(err.into());
        }
    };

    tracing::info!(product_id = product.id, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
        Some(Meta::empty()),
    ))
}

/// No cascade is declared on any product edge, so a product delete is
/// rejected while order details, inventories, orders, movements or catalog
/// rows still reference it.
pub async fn delete_product(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = match Products::delete_by_id(id).exec(&state.orm).await {
        Ok(res) => res,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::Conflict(
                    "product is still referenced by other records".into(),
                ));
            }
            return Err(err.into());
        }
    };

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(product_id = id, "product deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        category: model.category,
        unit_price: model.unit_price,
        supplier_id: model.supplier_id,
    }
}
