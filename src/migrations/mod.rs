pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_suppliers_table;
mod m20250612_000002_create_customers_table;
mod m20250612_000003_create_warehouses_table;
mod m20250612_000004_create_products_table;
mod m20250612_000005_create_orders_table;
mod m20250612_000006_create_order_details_table;
mod m20250612_000007_create_inventories_table;
mod m20250612_000008_create_shipments_table;
mod m20250612_000009_create_product_movements_table;
mod m20250612_000010_create_supplier_products_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_suppliers_table::Migration),
            Box::new(m20250612_000002_create_customers_table::Migration),
            Box::new(m20250612_000003_create_warehouses_table::Migration),
            Box::new(m20250612_000004_create_products_table::Migration),
            Box::new(m20250612_000005_create_orders_table::Migration),
            Box::new(m20250612_000006_create_order_details_table::Migration),
            Box::new(m20250612_000007_create_inventories_table::Migration),
            Box::new(m20250612_000008_create_shipments_table::Migration),
            Box::new(m20250612_000009_create_product_movements_table::Migration),
            Box::new(m20250612_000010_create_supplier_products_table::Migration),
        ]
    }
}
