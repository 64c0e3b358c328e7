use axum_supplychain_api::{
    db::{create_orm_conn, run_migrations},
    dto::{
        customers::CreateCustomerRequest,
        orders::{CreateOrderRequest, OrderLineRequest},
        products::CreateProductRequest,
        shipments::{CreateShipmentRequest, MovementRequest},
        suppliers::CreateSupplierRequest,
        inventory::CreateWarehouseRequest,
    },
    entity::{OrderDetails, ProductMovements, Shipments},
    error::AppError,
    services::{
        customer_service, inventory_service, order_service, product_service, shipment_service,
        supplier_service,
    },
    state::AppState,
};
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};

// Full lifecycle through the service layer: insert the graph, hit the
// restricting edges, then let the cascades clean up.
#[tokio::test]
async fn order_and_shipment_lifecycle() -> anyhow::Result<()> {
    let state = setup().await?;

    let supplier = supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: "Cobalt Freight".into(),
            region: "Americas".into(),
            phone: "+1-555-0142".into(),
            email: "dispatch@cobaltfreight.example".into(),
        },
    )
    .await?
    .data
    .expect("supplier");

    // A loyalty tier outside the enum never reaches the database.
    let rejected = customer_service::create_customer(
        &state,
        CreateCustomerRequest {
            name: "Noah Reyes".into(),
            loyalty_status: "Platinum".into(),
        },
    )
    .await;
    assert!(matches!(rejected, Err(AppError::BadRequest(_))));

    let customer = customer_service::create_customer(
        &state,
        CreateCustomerRequest {
            name: "Noah Reyes".into(),
            loyalty_status: "Gold".into(),
        },
    )
    .await?
    .data
    .expect("customer");

    let product = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Pallet Jack".into(),
            category: "Equipment".into(),
            unit_price: 150,
            supplier_id: supplier.id,
        },
    )
    .await?
    .data
    .expect("product");

    let warehouse = inventory_service::create_warehouse(
        &state,
        CreateWarehouseRequest {
            location: "Chicago South".into(),
        },
    )
    .await?
    .data
    .expect("warehouse");

    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: customer.id,
            product_id: product.id,
            supplier_id: supplier.id,
            order_date: None,
            status: "Pending".into(),
            details: vec![
                OrderLineRequest {
                    product_id: product.id,
                    quantity: 4,
                },
                OrderLineRequest {
                    product_id: product.id,
                    quantity: 1,
                },
            ],
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(order.details.len(), 2);

    let fetched = order_service::get_order(&state, order.order.id)
        .await?
        .data
        .expect("order with details");
    assert_eq!(fetched.details.len(), 2);

    // The product is pinned by order detail rows; deleting it must conflict.
    let blocked = product_service::delete_product(&state, product.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    let shipment = shipment_service::create_shipment(
        &state,
        CreateShipmentRequest {
            supplier_id: supplier.id,
            warehouse_id: warehouse.id,
            delivery_date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            status: "Received".into(),
            weight: 740.0,
            movements: vec![MovementRequest {
                product_id: product.id,
                warehouse_id: warehouse.id,
                quantity: 16,
                movement_type: "Received".into(),
            }],
        },
    )
    .await?
    .data
    .expect("shipment");
    assert_eq!(shipment.movements.len(), 1);

    // The supplier still owns a product, so its delete is rejected too.
    let blocked = supplier_service::delete_supplier(&state, supplier.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    // Dropping the order releases its detail lines via cascade.
    order_service::delete_order(&state, order.order.id).await?;
    assert_eq!(OrderDetails::find().count(&state.orm).await?, 0);

    // The movement rows still pin the product until their shipment goes.
    let blocked = product_service::delete_product(&state, product.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    shipment_service::delete_shipment(&state, shipment.shipment.id).await?;
    assert_eq!(ProductMovements::find().count(&state.orm).await?, 0);

    // Nothing references the product or supplier anymore.
    product_service::delete_product(&state, product.id).await?;
    supplier_service::delete_supplier(&state, supplier.id).await?;
    assert_eq!(Shipments::find().count(&state.orm).await?, 0);

    Ok(())
}

#[tokio::test]
async fn order_create_rolls_back_on_bad_detail_line() -> anyhow::Result<()> {
    let state = setup().await?;

    let supplier = supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: "Harbor Supply".into(),
            region: "Europe".into(),
            phone: "+44-20-555-0109".into(),
            email: "sales@harborsupply.example".into(),
        },
    )
    .await?
    .data
    .expect("supplier");

    let customer = customer_service::create_customer(
        &state,
        CreateCustomerRequest {
            name: "Maya Lindqvist".into(),
            loyalty_status: "Bronze".into(),
        },
    )
    .await?
    .data
    .expect("customer");

    let product = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Rope Spool".into(),
            category: "Equipment".into(),
            unit_price: 25,
            supplier_id: supplier.id,
        },
    )
    .await?
    .data
    .expect("product");

    let result = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: customer.id,
            product_id: product.id,
            supplier_id: supplier.id,
            order_date: None,
            status: "Pending".into(),
            details: vec![OrderLineRequest {
                // Unknown product: the whole order must roll back.
                product_id: 9999,
                quantity: 2,
            }],
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let orders = order_service::list_orders(
        &state,
        axum_supplychain_api::routes::params::OrderListQuery {
            pagination: axum_supplychain_api::routes::params::Pagination {
                page: None,
                per_page: None,
            },
            status: None,
            sort_order: None,
        },
    )
    .await?
    .data
    .expect("orders");
    assert!(orders.items.is_empty(), "rolled back order must not persist");

    Ok(())
}

async fn setup() -> anyhow::Result<AppState> {
    let conn = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&conn).await?;
    Ok(AppState { orm: conn })
}
