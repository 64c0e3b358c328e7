use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::inventory::{
        CreateInventoryRequest, CreateWarehouseRequest, InventoryList, WarehouseList,
    },
    error::AppResult,
    models::{Inventory, Warehouse},
    response::ApiResponse,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/", post(create_inventory))
}

pub fn warehouse_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses))
        .route("/", post(create_warehouse))
}

#[utoipa::path(get, path = "/api/inventory", tag = "Inventory")]
pub async fn list_inventory(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<InventoryList>>> {
    let resp = inventory_service::list_inventory(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 200, description = "Inventory recorded", body = ApiResponse<Inventory>),
        (status = 400, description = "Negative stock or unknown reference"),
    ),
    tag = "Inventory"
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryRequest>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    let resp = inventory_service::create_inventory(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/warehouses", tag = "Inventory")]
pub async fn list_warehouses(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WarehouseList>>> {
    let resp = inventory_service::list_warehouses(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = CreateWarehouseRequest,
    tag = "Inventory"
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(payload): Json<CreateWarehouseRequest>,
) -> AppResult<Json<ApiResponse<Warehouse>>> {
    let resp = inventory_service::create_warehouse(&state, payload).await?;
    Ok(Json(resp))
}
