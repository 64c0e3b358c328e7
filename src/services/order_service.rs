use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList, OrderWithDetails},
    entity::{
        order_details::{
            ActiveModel as OrderDetailActive, Column as OrderDetailCol, Entity as OrderDetails,
            Model as OrderDetailModel,
        },
        orders::{
            ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
        },
    },
    error::{AppError, AppResult},
    models::{Order, OrderDetail},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    state::AppState,
};

pub const ORDER_STATUSES: [&str; 4] = ["Pending", "Completed", "Shipped", "Cancelled"];

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::Status.eq(status.clone()));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let mut finder = Orders::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(OrderCol::OrderDate),
        SortOrder::Desc => finder.order_by_desc(OrderCol::OrderDate),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items: orders },
        Some(meta),
    ))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<OrderWithDetails>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let details = OrderDetails::find()
        .filter(OrderDetailCol::OrderId.eq(order.id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_detail_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Order",
        OrderWithDetails {
            order: order_from_entity(order),
            details,
        },
        Some(Meta::empty()),
    ))
}

/// Insert an order and its detail lines in one transaction. A rejected
/// line (bad quantity, unknown product) rolls the whole order back.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderWithDetails>> {
    if !ORDER_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "status must be one of {:?}",
            ORDER_STATUSES
        )));
    }
    if payload.details.iter().any(|line| line.quantity <= 0) {
        return Err(AppError::BadRequest(
            "detail quantity must be positive".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        product_id: Set(payload.product_id),
        supplier_id: Set(payload.supplier_id),
        order_date: Set(payload.order_date.unwrap_or_else(Utc::now).into()),
        status: Set(payload.status),
    };
    let order = match order.insert(&txn).await {
        Ok(o) => o,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::BadRequest(
                    "unknown customer, product or supplier".into(),
                ));
            }
            return Err(err.into());
        }
    };

    let mut details: Vec<OrderDetail> = Vec::new();
    for line in &payload.details {
        let detail = OrderDetailActive {
            id: NotSet,
            order_id: Set(order.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
        };
        let detail = match detail.insert(&txn).await {
            Ok(d) => d,
            Err(err) => {
                if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::BadRequest("unknown product in detail line".into()));
                }
                return Err(err.into());
            }
        };
        details.push(order_detail_from_entity(detail));
    }

    txn.commit().await?;

    tracing::info!(order_id = order.id, lines = details.len(), "order created");

    Ok(ApiResponse::success(
        "Order created",
        OrderWithDetails {
            order: order_from_entity(order),
            details,
        },
        Some(Meta::empty()),
    ))
}

/// Deleting an order cascades to its detail lines.
pub async fn delete_order(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(order_id = id, "order deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_id: model.customer_id,
        product_id: model.product_id,
        supplier_id: model.supplier_id,
        order_date: model.order_date.with_timezone(&Utc),
        status: model.status,
    }
}

fn order_detail_from_entity(model: OrderDetailModel) -> OrderDetail {
    OrderDetail {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        quantity: model.quantity,
    }
}
