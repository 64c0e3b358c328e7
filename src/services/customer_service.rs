use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    dto::customers::{CreateCustomerRequest, CustomerList},
    entity::customers::{
        ActiveModel as CustomerActive, Column as CustomerCol, Entity as Customers,
        Model as CustomerModel,
    },
    error::{AppError, AppResult},
    models::Customer,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const LOYALTY_TIERS: [&str; 3] = ["Bronze", "Silver", "Gold"];

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let items = Customers::find()
        .order_by_asc(CustomerCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Customers",
        CustomerList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<ApiResponse<Customer>> {
    let customer = Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(customer_from_entity);
    let customer = match customer {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Customer", customer, None))
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    if !LOYALTY_TIERS.contains(&payload.loyalty_status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "loyalty_status must be one of {:?}",
            LOYALTY_TIERS
        )));
    }

    let active = CustomerActive {
        id: NotSet,
        name: Set(payload.name),
        loyalty_status: Set(payload.loyalty_status),
    };
    let customer = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Customer created",
        customer_from_entity(customer),
        Some(Meta::empty()),
    ))
}

pub async fn delete_customer(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = match Customers::delete_by_id(id).exec(&state.orm).await {
        Ok(res) => res,
        Err(err) => {
            if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                return Err(AppError::Conflict(
                    "customer is still referenced by orders".into(),
                ));
            }
            return Err(err.into());
        }
    };

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        loyalty_status: model.loyalty_status,
    }
}
