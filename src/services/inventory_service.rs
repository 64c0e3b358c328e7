use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    dto::inventory::{
        CreateInventoryRequest, CreateWarehouseRequest, InventoryList, WarehouseList,
    },
    entity::{
        inventories::{
            ActiveModel as InventoryActive, Column as InventoryCol, Entity as Inventories,
            Model as InventoryModel,
        },
        warehouses::{
            ActiveModel as WarehouseActive, Column as WarehouseCol, Entity as Warehouses,
            Model as WarehouseModel,
        },
    },
    error::{AppError, AppResult},
    models::{Inventory, Warehouse},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_warehouses(state: &AppState) -> AppResult<ApiResponse<WarehouseList>> {
    let items = Warehouses::find()
        .order_by_asc(WarehouseCol::Location)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(warehouse_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Warehouses",
        WarehouseList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_warehouse(
    state: &AppState,
    payload: CreateWarehouseRequest,
) -> AppResult<ApiResponse<Warehouse>> {
    let active = WarehouseActive {
        id: NotSet,
        location: Set(payload.location),
    };
    let warehouse = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Warehouse created",
        warehouse_from_entity(warehouse),
        Some(Meta::empty()),
    ))
}

pub async fn list_inventory(state: &AppState) -> AppResult<ApiResponse<InventoryList>> {
    let items = Inventories::find()
        .order_by_asc(InventoryCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(inventory_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Inventory",
        InventoryList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_inventory(
    state: &AppState,
    payload: CreateInventoryRequest,
) -> AppResult<ApiResponse<Inventory>> {
    if payload.quantity_in_stock < 0 {
        return Err(AppError::BadRequest(
            "quantity_in_stock must not be negative".into(),
        ));
    }

    let active = InventoryActive {
        id: NotSet,
        product_id: Set(payload.product_id),
        warehouse_id: Set(payload.warehouse_id),
        quantity_in_stock: Set(payload.quantity_in_stock),
    };
    let record = match active.insert(&state.orm).await {
        Ok(r) => r,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::BadRequest(
                    "unknown product_id or warehouse_id".into(),
                ));
            }
            return Err(err.into());
        }
    };

    Ok(ApiResponse::success(
        "Inventory recorded",
        inventory_from_entity(record),
        Some(Meta::empty()),
    ))
}

fn warehouse_from_entity(model: WarehouseModel) -> Warehouse {
    Warehouse {
        id: model.id,
        location: model.location,
    }
}

fn inventory_from_entity(model: InventoryModel) -> Inventory {
    Inventory {
        id: model.id,
        product_id: model.product_id,
        warehouse_id: model.warehouse_id,
        quantity_in_stock: model.quantity_in_stock,
    }
}
