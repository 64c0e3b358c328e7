use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Inventory, Warehouse};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWarehouseRequest {
    pub location: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseList {
    pub items: Vec<Warehouse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInventoryRequest {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity_in_stock: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryList {
    pub items: Vec<Inventory>,
}
