use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// Row shapes produced by the report queries. Each struct mirrors the
/// projection of one query; field names double as the SQL column aliases.

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct OrderSummaryRow {
    pub order_id: i32,
    pub customer_name: String,
    pub loyalty_status: String,
    pub product_name: String,
    pub supplier_name: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct LowStockRow {
    pub product_id: i32,
    pub product_name: String,
    pub category: String,
    pub warehouse_location: String,
    pub quantity_in_stock: i32,
}

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ShipmentSummaryRow {
    pub shipment_id: i32,
    pub supplier_name: String,
    pub warehouse_location: String,
    pub delivery_date: NaiveDate,
    pub status: String,
    pub weight: f64,
}

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct MovementRow {
    pub movement_id: i32,
    pub shipment_id: i32,
    pub product_name: String,
    pub warehouse_location: String,
    pub quantity: i32,
    pub movement_type: String,
}

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct OrderLineTotalRow {
    pub order_id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,
}

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct SupplierCatalogRow {
    pub supplier_name: String,
    pub product_name: String,
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryList {
    pub items: Vec<OrderSummaryRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LowStockList {
    pub items: Vec<LowStockRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShipmentSummaryList {
    pub items: Vec<ShipmentSummaryRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovementList {
    pub items: Vec<MovementRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineTotalList {
    pub items: Vec<OrderLineTotalRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierCatalogList {
    pub items: Vec<SupplierCatalogRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DistinctValueList {
    pub values: Vec<String>,
}
