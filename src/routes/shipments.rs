use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};

use crate::{
    dto::shipments::{CreateShipmentRequest, ShipmentList, ShipmentWithMovements},
    error::AppResult,
    response::ApiResponse,
    routes::params::ShipmentListQuery,
    services::shipment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shipments))
        .route("/", post(create_shipment))
        .route("/{id}", get(get_shipment))
        .route("/{id}", delete(delete_shipment))
}

#[utoipa::path(
    get,
    path = "/api/shipments",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("sort_order" = Option<String>, Query, description = "asc or desc on delivery date")
    ),
    responses(
        (status = 200, description = "List shipments", body = ApiResponse<ShipmentList>)
    ),
    tag = "Shipments"
)]
pub async fn list_shipments(
    State(state): State<AppState>,
    Query(query): Query<ShipmentListQuery>,
) -> AppResult<Json<ApiResponse<ShipmentList>>> {
    let resp = shipment_service::list_shipments(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/shipments/{id}",
    params(("id" = i32, Path, description = "Shipment ID")),
    responses(
        (status = 200, description = "Shipment with product movements", body = ApiResponse<ShipmentWithMovements>),
        (status = 404, description = "Shipment not found"),
    ),
    tag = "Shipments"
)]
pub async fn get_shipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ShipmentWithMovements>>> {
    let resp = shipment_service::get_shipment(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/shipments",
    request_body = CreateShipmentRequest,
    responses(
        (status = 200, description = "Shipment created with movements", body = ApiResponse<ShipmentWithMovements>),
        (status = 400, description = "Invalid status, movement or reference"),
    ),
    tag = "Shipments"
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateShipmentRequest>,
) -> AppResult<Json<ApiResponse<ShipmentWithMovements>>> {
    let resp = shipment_service::create_shipment(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/shipments/{id}",
    params(("id" = i32, Path, description = "Shipment ID")),
    responses(
        (status = 200, description = "Shipment deleted; movements cascade"),
        (status = 404, description = "Shipment not found"),
    ),
    tag = "Shipments"
)]
pub async fn delete_shipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = shipment_service::delete_shipment(&state, id).await?;
    Ok(Json(resp))
}
