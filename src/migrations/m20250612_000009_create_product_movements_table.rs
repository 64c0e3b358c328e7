use sea_orm_migration::prelude::*;

use super::m20250612_000003_create_warehouses_table::Warehouses;
use super::m20250612_000004_create_products_table::Products;
use super::m20250612_000008_create_shipments_table::Shipments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductMovements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductMovements::ShipmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductMovements::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductMovements::WarehouseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductMovements::Quantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(ProductMovements::Quantity).gt(0)),
                    )
                    .col(
                        ColumnDef::new(ProductMovements::MovementType)
                            .string()
                            .not_null()
                            .check(Expr::col(ProductMovements::MovementType).is_in([
                                "Shipped",
                                "Received",
                                "Transferred",
                            ])),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_movements_shipment_id")
                            .from(ProductMovements::Table, ProductMovements::ShipmentId)
                            .to(Shipments::Table, Shipments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_movements_product_id")
                            .from(ProductMovements::Table, ProductMovements::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_movements_warehouse_id")
                            .from(ProductMovements::Table, ProductMovements::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductMovements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductMovements {
    Table,
    Id,
    ShipmentId,
    ProductId,
    WarehouseId,
    Quantity,
    MovementType,
}
