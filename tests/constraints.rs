use axum_supplychain_api::{
    db::{create_orm_conn, run_migrations},
    entity::{
        customers, inventories, order_details, orders, product_movements, products, shipments,
        suppliers, warehouses, Customers, Inventories, OrderDetails, Orders, ProductMovements,
        Products, Shipments, Suppliers,
    },
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, Set, Statement,
};

// Constraint behavior is exercised with raw statements where the typed API
// cannot express the invalid row (NULLs, out-of-range values).

#[tokio::test]
async fn check_violation_rejects_customer_insert() -> anyhow::Result<()> {
    let conn = setup().await?;

    let result = exec(
        &conn,
        "INSERT INTO customers (name, loyalty_status) VALUES ('Dana Platinum', 'Platinum')",
    )
    .await;
    assert!(result.is_err(), "loyalty_status outside the enum must fail");
    assert_eq!(Customers::find().count(&conn).await?, 0);

    Ok(())
}

#[tokio::test]
async fn not_null_violation_rejects_inventory_insert() -> anyhow::Result<()> {
    let conn = setup().await?;
    let fixture = base_fixture(&conn).await?;

    let stmt = format!(
        "INSERT INTO inventories (warehouse_id, quantity_in_stock) VALUES ({}, 5)",
        fixture.warehouse_id
    );
    let result = exec(&conn, &stmt).await;
    assert!(result.is_err(), "inventory without product_id must fail");
    assert_eq!(Inventories::find().count(&conn).await?, 0);

    Ok(())
}

#[tokio::test]
async fn check_violations_reject_out_of_range_values() -> anyhow::Result<()> {
    let conn = setup().await?;
    let fixture = base_fixture(&conn).await?;

    // Non-positive order detail quantity.
    for quantity in [0, -3] {
        let stmt = format!(
            "INSERT INTO order_details (order_id, product_id, quantity) VALUES ({}, {}, {})",
            fixture.order_id, fixture.product_id, quantity
        );
        assert!(exec(&conn, &stmt).await.is_err());
    }
    assert_eq!(OrderDetails::find().count(&conn).await?, 0);

    // Negative unit price.
    let stmt = format!(
        "INSERT INTO products (name, category, unit_price, supplier_id) \
         VALUES ('Broken', 'Electronics', -1, {})",
        fixture.supplier_id
    );
    assert!(exec(&conn, &stmt).await.is_err());

    // Status outside the enum.
    let stmt = format!(
        "INSERT INTO orders (customer_id, product_id, supplier_id, status) \
         VALUES ({}, {}, {}, 'Misplaced')",
        fixture.customer_id, fixture.product_id, fixture.supplier_id
    );
    assert!(exec(&conn, &stmt).await.is_err());
    assert_eq!(Orders::find().count(&conn).await?, 1);

    // Negative stock.
    let stmt = format!(
        "INSERT INTO inventories (product_id, warehouse_id, quantity_in_stock) \
         VALUES ({}, {}, -10)",
        fixture.product_id, fixture.warehouse_id
    );
    assert!(exec(&conn, &stmt).await.is_err());
    assert_eq!(Inventories::find().count(&conn).await?, 0);

    Ok(())
}

#[tokio::test]
async fn foreign_key_violation_rejects_orphan_insert() -> anyhow::Result<()> {
    let conn = setup().await?;
    let fixture = base_fixture(&conn).await?;

    let order = orders::ActiveModel {
        id: NotSet,
        customer_id: Set(9999),
        product_id: Set(fixture.product_id),
        supplier_id: Set(fixture.supplier_id),
        order_date: Set(Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap().into()),
        status: Set("Pending".into()),
    }
    .insert(&conn)
    .await;
    assert!(order.is_err(), "order referencing a missing customer must fail");
    assert_eq!(Orders::find().count(&conn).await?, 1);

    Ok(())
}

#[tokio::test]
async fn deleting_supplier_cascades_to_orders_and_shipments() -> anyhow::Result<()> {
    let conn = setup().await?;

    // The cascading supplier sells through orders and shipments only; the
    // ordered product belongs to a second supplier so no restricting edge
    // blocks the delete.
    let cascading = create_supplier(&conn, "Meridian Logistics", "Americas").await?;
    let product_owner = create_supplier(&conn, "Baltic Components", "Europe").await?;

    let customer = customers::ActiveModel {
        id: NotSet,
        name: Set("Erin Fowler".into()),
        loyalty_status: Set("Silver".into()),
    }
    .insert(&conn)
    .await?;

    let warehouse = warehouses::ActiveModel {
        id: NotSet,
        location: Set("Hamburg Yard".into()),
    }
    .insert(&conn)
    .await?;

    let product = products::ActiveModel {
        id: NotSet,
        name: Set("Relay Switch".into()),
        category: Set("Electronics".into()),
        unit_price: Set(45),
        supplier_id: Set(product_owner.id),
    }
    .insert(&conn)
    .await?;

    let order = orders::ActiveModel {
        id: NotSet,
        customer_id: Set(customer.id),
        product_id: Set(product.id),
        supplier_id: Set(cascading.id),
        order_date: Set(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap().into()),
        status: Set("Pending".into()),
    }
    .insert(&conn)
    .await?;

    order_details::ActiveModel {
        id: NotSet,
        order_id: Set(order.id),
        product_id: Set(product.id),
        quantity: Set(4),
    }
    .insert(&conn)
    .await?;

    let shipment = shipments::ActiveModel {
        id: NotSet,
        supplier_id: Set(cascading.id),
        warehouse_id: Set(warehouse.id),
        delivery_date: Set(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
        status: Set("In Transit".into()),
        weight: Set(320.0),
    }
    .insert(&conn)
    .await?;

    product_movements::ActiveModel {
        id: NotSet,
        shipment_id: Set(shipment.id),
        product_id: Set(product.id),
        warehouse_id: Set(warehouse.id),
        quantity: Set(12),
        movement_type: Set("Shipped".into()),
    }
    .insert(&conn)
    .await?;

    cascading.delete(&conn).await?;

    assert_eq!(Orders::find().count(&conn).await?, 0);
    assert_eq!(OrderDetails::find().count(&conn).await?, 0);
    assert_eq!(Shipments::find().count(&conn).await?, 0);
    assert_eq!(ProductMovements::find().count(&conn).await?, 0);

    // Unrelated rows survive the cascade.
    assert_eq!(Suppliers::find().count(&conn).await?, 1);
    assert_eq!(Customers::find().count(&conn).await?, 1);
    assert_eq!(Products::find().count(&conn).await?, 1);

    Ok(())
}

#[tokio::test]
async fn deleting_referenced_product_is_rejected() -> anyhow::Result<()> {
    let conn = setup().await?;
    let fixture = base_fixture(&conn).await?;

    inventories::ActiveModel {
        id: NotSet,
        product_id: Set(fixture.product_id),
        warehouse_id: Set(fixture.warehouse_id),
        quantity_in_stock: Set(25),
    }
    .insert(&conn)
    .await?;

    let result = Products::delete_by_id(fixture.product_id).exec(&conn).await;
    assert!(
        result.is_err(),
        "no cascade is declared on product edges, the delete must fail"
    );
    assert_eq!(Products::find().count(&conn).await?, 1);

    Ok(())
}

struct Fixture {
    supplier_id: i32,
    customer_id: i32,
    warehouse_id: i32,
    product_id: i32,
    order_id: i32,
}

async fn setup() -> anyhow::Result<DatabaseConnection> {
    let conn = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&conn).await?;
    Ok(conn)
}

async fn exec(
    conn: &DatabaseConnection,
    sql: &str,
) -> Result<sea_orm::ExecResult, sea_orm::DbErr> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(backend, sql.to_owned()))
        .await
}

async fn create_supplier(
    conn: &DatabaseConnection,
    name: &str,
    region: &str,
) -> anyhow::Result<suppliers::Model> {
    let supplier = suppliers::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        region: Set(region.into()),
        phone: Set("+1-555-0100".into()),
        email: Set("ops@example.com".into()),
    }
    .insert(conn)
    .await?;
    Ok(supplier)
}

async fn base_fixture(conn: &DatabaseConnection) -> anyhow::Result<Fixture> {
    let supplier = create_supplier(conn, "Atlas Parts", "Americas").await?;

    let customer = customers::ActiveModel {
        id: NotSet,
        name: Set("Priya Nair".into()),
        loyalty_status: Set("Gold".into()),
    }
    .insert(conn)
    .await?;

    let warehouse = warehouses::ActiveModel {
        id: NotSet,
        location: Set("Denver Annex".into()),
    }
    .insert(conn)
    .await?;

    let product = products::ActiveModel {
        id: NotSet,
        name: Set("Bearing Kit".into()),
        category: Set("Industrial".into()),
        unit_price: Set(80),
        supplier_id: Set(supplier.id),
    }
    .insert(conn)
    .await?;

    let order = orders::ActiveModel {
        id: NotSet,
        customer_id: Set(customer.id),
        product_id: Set(product.id),
        supplier_id: Set(supplier.id),
        order_date: Set(Utc.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).unwrap().into()),
        status: Set("Pending".into()),
    }
    .insert(conn)
    .await?;

    Ok(Fixture {
        supplier_id: supplier.id,
        customer_id: customer.id,
        warehouse_id: warehouse.id,
        product_id: product.id,
        order_id: order.id,
    })
}
