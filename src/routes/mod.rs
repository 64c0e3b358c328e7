use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod doc;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod params;
pub mod products;
pub mod reports;
pub mod shipments;
pub mod suppliers;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/suppliers", suppliers::router())
        .nest("/customers", customers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/warehouses", inventory::warehouse_router())
        .nest("/inventory", inventory::router())
        .nest("/shipments", shipments::router())
        .nest("/reports", reports::router())
}
