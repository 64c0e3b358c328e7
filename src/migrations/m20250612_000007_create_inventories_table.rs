use sea_orm_migration::prelude::*;

use super::m20250612_000003_create_warehouses_table::Warehouses;
use super::m20250612_000004_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inventories::ProductId).integer().not_null())
                    .col(
                        ColumnDef::new(Inventories::WarehouseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inventories::QuantityInStock)
                            .integer()
                            .not_null()
                            .check(Expr::col(Inventories::QuantityInStock).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_product_id")
                            .from(Inventories::Table, Inventories::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_warehouse_id")
                            .from(Inventories::Table, Inventories::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inventories {
    Table,
    Id,
    ProductId,
    WarehouseId,
    QuantityInStock,
}
