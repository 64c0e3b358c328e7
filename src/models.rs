use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub loyalty_status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub unit_price: i64,
    pub supplier_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub supplier_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Warehouse {
    pub id: i32,
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Inventory {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity_in_stock: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Shipment {
    pub id: i32,
    pub supplier_id: i32,
    pub warehouse_id: i32,
    pub delivery_date: NaiveDate,
    pub status: String,
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductMovement {
    pub id: i32,
    pub shipment_id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub movement_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SupplierProduct {
    pub supplier_id: i32,
    pub product_id: i32,
}
