use sea_orm_migration::prelude::*;

use super::m20250612_000001_create_suppliers_table::Suppliers;
use super::m20250612_000003_create_warehouses_table::Warehouses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shipments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shipments::SupplierId).integer().not_null())
                    .col(ColumnDef::new(Shipments::WarehouseId).integer().not_null())
                    .col(ColumnDef::new(Shipments::DeliveryDate).date().not_null())
                    .col(
                        ColumnDef::new(Shipments::Status)
                            .string()
                            .not_null()
                            .check(Expr::col(Shipments::Status).is_in([
                                "Pending",
                                "In Transit",
                                "Received",
                                "Cancelled",
                            ])),
                    )
                    .col(ColumnDef::new(Shipments::Weight).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_supplier_id")
                            .from(Shipments::Table, Shipments::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_warehouse_id")
                            .from(Shipments::Table, Shipments::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shipments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shipments {
    Table,
    Id,
    SupplierId,
    WarehouseId,
    DeliveryDate,
    Status,
    Weight,
}
