use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ProductMovement, Shipment};

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovementRequest {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub movement_type: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShipmentRequest {
    pub supplier_id: i32,
    pub warehouse_id: i32,
    pub delivery_date: NaiveDate,
    pub status: String,
    pub weight: f64,
    pub movements: Vec<MovementRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShipmentWithMovements {
    pub shipment: Shipment,
    pub movements: Vec<ProductMovement>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShipmentList {
    pub items: Vec<Shipment>,
}
