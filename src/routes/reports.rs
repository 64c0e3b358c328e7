use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{Duration, NaiveTime};

use crate::{
    dto::products::ProductList,
    dto::reports::{
        DistinctValueList, LowStockList, MovementList, OrderLineTotalList, OrderSummaryList,
        ShipmentSummaryList, SupplierCatalogList,
    },
    error::AppResult,
    response::ApiResponse,
    routes::params::{
        DateRangeQuery, LowStockQuery, MinTotalQuery, MinWeightQuery, PriceSortQuery, SortOrder,
        StatusQuery,
    },
    services::report_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(order_summaries))
        .route("/orders/status", get(orders_with_status))
        .route("/orders/range", get(orders_between))
        .route("/orders/line-totals", get(order_line_totals))
        .route("/inventory/low-stock", get(low_stock))
        .route("/inventory/categories", get(stocked_categories))
        .route("/shipments/heavy", get(heavy_shipments))
        .route("/shipments/received", get(received_shipments))
        .route("/movements/shipped", get(shipped_movements))
        .route("/products/by-price", get(products_by_price))
        .route("/suppliers/regions", get(supplier_regions))
        .route("/suppliers/catalog", get(supplier_catalog))
}

#[utoipa::path(
    get,
    path = "/api/reports/orders",
    responses(
        (status = 200, description = "Orders with customer, product and supplier", body = ApiResponse<OrderSummaryList>)
    ),
    tag = "Reports"
)]
pub async fn order_summaries(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrderSummaryList>>> {
    let resp = report_service::order_summaries(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/orders/status",
    params(
        ("status" = Option<String>, Query, description = "Order status, default Completed")
    ),
    responses(
        (status = 200, description = "Orders filtered by status", body = ApiResponse<OrderSummaryList>)
    ),
    tag = "Reports"
)]
pub async fn orders_with_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<ApiResponse<OrderSummaryList>>> {
    let status = query.status.unwrap_or_else(|| "Completed".to_string());
    let resp = report_service::orders_with_status(&state, &status).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/orders/range",
    params(
        ("from" = String, Query, description = "First order date, inclusive (YYYY-MM-DD)"),
        ("to" = String, Query, description = "Last order date, inclusive (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Orders in the date range, oldest first", body = ApiResponse<OrderSummaryList>)
    ),
    tag = "Reports"
)]
pub async fn orders_between(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<ApiResponse<OrderSummaryList>>> {
    let from = query.from.and_time(NaiveTime::MIN).and_utc();
    let to_exclusive = query.to.and_time(NaiveTime::MIN).and_utc() + Duration::days(1);
    let resp = report_service::orders_between(&state, from, to_exclusive).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/orders/line-totals",
    params(
        ("min_total" = Option<i64>, Query, description = "Line total threshold, default 500")
    ),
    responses(
        (status = 200, description = "Order lines with quantity * unit_price above the threshold", body = ApiResponse<OrderLineTotalList>)
    ),
    tag = "Reports"
)]
pub async fn order_line_totals(
    State(state): State<AppState>,
    Query(query): Query<MinTotalQuery>,
) -> AppResult<Json<ApiResponse<OrderLineTotalList>>> {
    let threshold = query.min_total.unwrap_or(500);
    let resp = report_service::order_line_totals_above(&state, threshold).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/inventory/low-stock",
    params(
        ("threshold" = Option<i32>, Query, description = "Stock threshold, default 50"),
        ("category" = Option<String>, Query, description = "Restrict to one product category")
    ),
    responses(
        (status = 200, description = "Inventory below the threshold", body = ApiResponse<LowStockList>)
    ),
    tag = "Reports"
)]
pub async fn low_stock(
    State(state): State<AppState>,
    Query(query): Query<LowStockQuery>,
) -> AppResult<Json<ApiResponse<LowStockList>>> {
    let threshold = query.threshold.unwrap_or(50);
    let resp = report_service::low_stock(&state, threshold, query.category.as_deref()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/inventory/categories",
    responses(
        (status = 200, description = "Distinct categories currently in stock", body = ApiResponse<DistinctValueList>)
    ),
    tag = "Reports"
)]
pub async fn stocked_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DistinctValueList>>> {
    let resp = report_service::distinct_stocked_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/shipments/heavy",
    params(
        ("min_weight" = Option<f64>, Query, description = "Weight threshold, default 1000")
    ),
    responses(
        (status = 200, description = "Shipments above the weight threshold", body = ApiResponse<ShipmentSummaryList>)
    ),
    tag = "Reports"
)]
pub async fn heavy_shipments(
    State(state): State<AppState>,
    Query(query): Query<MinWeightQuery>,
) -> AppResult<Json<ApiResponse<ShipmentSummaryList>>> {
    let min_weight = query.min_weight.unwrap_or(1000.0);
    let resp = report_service::heavy_shipments(&state, min_weight).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/shipments/received",
    responses(
        (status = 200, description = "Shipments received at their warehouse", body = ApiResponse<ShipmentSummaryList>)
    ),
    tag = "Reports"
)]
pub async fn received_shipments(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ShipmentSummaryList>>> {
    let resp = report_service::received_shipments(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/movements/shipped",
    responses(
        (status = 200, description = "Product movements of type Shipped", body = ApiResponse<MovementList>)
    ),
    tag = "Reports"
)]
pub async fn shipped_movements(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MovementList>>> {
    let resp = report_service::shipped_movements(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/products/by-price",
    params(
        ("sort_order" = Option<String>, Query, description = "asc or desc, default asc")
    ),
    responses(
        (status = 200, description = "Products ordered by unit price", body = ApiResponse<ProductList>)
    ),
    tag = "Reports"
)]
pub async fn products_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceSortQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let sort_order = query.sort_order.unwrap_or(SortOrder::Asc);
    let resp = report_service::products_by_price(&state, sort_order).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/suppliers/regions",
    responses(
        (status = 200, description = "Distinct supplier regions", body = ApiResponse<DistinctValueList>)
    ),
    tag = "Reports"
)]
pub async fn supplier_regions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DistinctValueList>>> {
    let resp = report_service::distinct_supplier_regions(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/suppliers/catalog",
    responses(
        (status = 200, description = "Supplier and product catalog pairs", body = ApiResponse<SupplierCatalogList>)
    ),
    tag = "Reports"
)]
pub async fn supplier_catalog(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SupplierCatalogList>>> {
    let resp = report_service::supplier_catalog(&state).await?;
    Ok(Json(resp))
}
