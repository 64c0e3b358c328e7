use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use crate::entity::{
    customers, inventories, order_details, orders, product_movements, products, shipments,
    supplier_products, suppliers, warehouses, SupplierProducts,
};

/// Row counts inserted by [`seed_demo_data`].
#[derive(Debug)]
pub struct SeedSummary {
    pub suppliers: usize,
    pub customers: usize,
    pub warehouses: usize,
    pub products: usize,
    pub orders: usize,
    pub order_details: usize,
    pub inventories: usize,
    pub shipments: usize,
    pub product_movements: usize,
    pub supplier_products: usize,
}

/// Insert the demonstration dataset into a freshly migrated schema.
///
/// The rows are referentially consistent and deterministic, so every report
/// query has a known answer against them.
pub async fn seed_demo_data(conn: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
    let electroworld = suppliers::ActiveModel {
        id: NotSet,
        name: Set("ElectroWorld".into()),
        region: Set("Asia".into()),
        phone: Set("+65-6555-0192".into()),
        email: Set("sales@electroworld.example".into()),
    }
    .insert(conn)
    .await?;
    let greenfarm = suppliers::ActiveModel {
        id: NotSet,
        name: Set("GreenFarm Produce".into()),
        region: Set("Europe".into()),
        phone: Set("+31-20-555-0171".into()),
        email: Set("orders@greenfarm.example".into()),
    }
    .insert(conn)
    .await?;
    let nordic = suppliers::ActiveModel {
        id: NotSet,
        name: Set("Nordic Timber".into()),
        region: Set("Europe".into()),
        phone: Set("+47-22-555-0144".into()),
        email: Set("contact@nordictimber.example".into()),
    }
    .insert(conn)
    .await?;

    let alice = customers::ActiveModel {
        id: NotSet,
        name: Set("Alice Johnson".into()),
        loyalty_status: Set("Gold".into()),
    }
    .insert(conn)
    .await?;
    let bob = customers::ActiveModel {
        id: NotSet,
        name: Set("Bob Martinez".into()),
        loyalty_status: Set("Silver".into()),
    }
    .insert(conn)
    .await?;
    let chen = customers::ActiveModel {
        id: NotSet,
        name: Set("Chen Wei".into()),
        loyalty_status: Set("Bronze".into()),
    }
    .insert(conn)
    .await?;

    let rotterdam = warehouses::ActiveModel {
        id: NotSet,
        location: Set("Rotterdam Dock 4".into()),
    }
    .insert(conn)
    .await?;
    let singapore = warehouses::ActiveModel {
        id: NotSet,
        location: Set("Singapore Hub".into()),
    }
    .insert(conn)
    .await?;
    let oslo = warehouses::ActiveModel {
        id: NotSet,
        location: Set("Oslo Depot".into()),
    }
    .insert(conn)
    .await?;

    let phone = products::ActiveModel {
        id: NotSet,
        name: Set("Phone".into()),
        category: Set("Electronics".into()),
        unit_price: Set(200),
        supplier_id: Set(electroworld.id),
    }
    .insert(conn)
    .await?;
    let laptop = products::ActiveModel {
        id: NotSet,
        name: Set("Laptop".into()),
        category: Set("Electronics".into()),
        unit_price: Set(450),
        supplier_id: Set(electroworld.id),
    }
    .insert(conn)
    .await?;
    let olive_oil = products::ActiveModel {
        id: NotSet,
        name: Set("Olive Oil".into()),
        category: Set("Grocery".into()),
        unit_price: Set(18),
        supplier_id: Set(greenfarm.id),
    }
    .insert(conn)
    .await?;
    let oak_desk = products::ActiveModel {
        id: NotSet,
        name: Set("Oak Desk".into()),
        category: Set("Furniture".into()),
        unit_price: Set(320),
        supplier_id: Set(nordic.id),
    }
    .insert(conn)
    .await?;

    for (product_id, warehouse_id, stock) in [
        (phone.id, singapore.id, 10),
        (laptop.id, singapore.id, 75),
        (olive_oil.id, rotterdam.id, 40),
        (oak_desk.id, oslo.id, 120),
    ] {
        inventories::ActiveModel {
            id: NotSet,
            product_id: Set(product_id),
            warehouse_id: Set(warehouse_id),
            quantity_in_stock: Set(stock),
        }
        .insert(conn)
        .await?;
    }

    let order_rows = [
        (alice.id, phone.id, electroworld.id, ts(2025, 3, 8, 10, 30), "Completed"),
        (bob.id, olive_oil.id, greenfarm.id, ts(2025, 3, 15, 9, 0), "Pending"),
        (chen.id, oak_desk.id, nordic.id, ts(2025, 4, 2, 16, 45), "Shipped"),
        (alice.id, laptop.id, electroworld.id, ts(2025, 2, 20, 11, 15), "Completed"),
    ];
    let mut order_ids = Vec::new();
    for (customer_id, product_id, supplier_id, order_date, status) in order_rows {
        let order = orders::ActiveModel {
            id: NotSet,
            customer_id: Set(customer_id),
            product_id: Set(product_id),
            supplier_id: Set(supplier_id),
            order_date: Set(order_date),
            status: Set(status.into()),
        }
        .insert(conn)
        .await?;
        order_ids.push(order.id);
    }

    let detail_rows = [
        (order_ids[0], phone.id, 3),
        (order_ids[1], olive_oil.id, 2),
        (order_ids[2], oak_desk.id, 1),
        (order_ids[3], laptop.id, 1),
    ];
    for (order_id, product_id, quantity) in detail_rows {
        order_details::ActiveModel {
            id: NotSet,
            order_id: Set(order_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
        }
        .insert(conn)
        .await?;
    }

    let shipment_rows = [
        (electroworld.id, singapore.id, date(2025, 3, 5), "Received", 1250.5),
        (greenfarm.id, rotterdam.id, date(2025, 3, 18), "In Transit", 420.0),
        (nordic.id, oslo.id, date(2025, 4, 1), "Received", 1890.0),
    ];
    let mut shipment_ids = Vec::new();
    for (supplier_id, warehouse_id, delivery_date, status, weight) in shipment_rows {
        let shipment = shipments::ActiveModel {
            id: NotSet,
            supplier_id: Set(supplier_id),
            warehouse_id: Set(warehouse_id),
            delivery_date: Set(delivery_date),
            status: Set(status.into()),
            weight: Set(weight),
        }
        .insert(conn)
        .await?;
        shipment_ids.push(shipment.id);
    }

    let movement_rows = [
        (shipment_ids[0], phone.id, singapore.id, 500, "Shipped"),
        (shipment_ids[1], olive_oil.id, rotterdam.id, 800, "Received"),
        (shipment_ids[2], oak_desk.id, oslo.id, 150, "Shipped"),
    ];
    for (shipment_id, product_id, warehouse_id, quantity, movement_type) in movement_rows {
        product_movements::ActiveModel {
            id: NotSet,
            shipment_id: Set(shipment_id),
            product_id: Set(product_id),
            warehouse_id: Set(warehouse_id),
            quantity: Set(quantity),
            movement_type: Set(movement_type.into()),
        }
        .insert(conn)
        .await?;
    }

    let catalog_rows = [
        (electroworld.id, phone.id),
        (electroworld.id, laptop.id),
        (greenfarm.id, olive_oil.id),
        (nordic.id, oak_desk.id),
    ];
    // exec_without_returning: the composite key has no last-insert id to
    // read back.
    SupplierProducts::insert_many(catalog_rows.into_iter().map(|(supplier_id, product_id)| {
        supplier_products::ActiveModel {
            supplier_id: Set(supplier_id),
            product_id: Set(product_id),
        }
    }))
    .exec_without_returning(conn)
    .await?;

    Ok(SeedSummary {
        suppliers: 3,
        customers: 3,
        warehouses: 3,
        products: 4,
        orders: 4,
        order_details: 4,
        inventories: 4,
        shipments: 3,
        product_movements: 3,
        supplier_products: 4,
    })
}

// Both helpers only ever see literal arguments, so the Option unwrap cannot
// fire at runtime.
fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .into()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
