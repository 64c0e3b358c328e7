use axum_supplychain_api::{
    db::{create_orm_conn, run_migrations},
    seed::seed_demo_data,
    services::report_service,
    routes::params::SortOrder,
    state::AppState,
};
use chrono::{TimeZone, Utc};

// Every report query has a deterministic answer against the seeded dataset.

#[tokio::test]
async fn order_summaries_join_all_parents_newest_first() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::order_summaries(&state).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 4);
    assert_eq!(items[0].customer_name, "Chen Wei");
    assert_eq!(items[0].product_name, "Oak Desk");
    assert_eq!(items[0].supplier_name, "Nordic Timber");
    assert_eq!(items[0].loyalty_status, "Bronze");
    assert_eq!(
        items[0].order_date,
        Utc.with_ymd_and_hms(2025, 4, 2, 16, 45, 0).unwrap()
    );
    // Oldest order last.
    assert_eq!(items[3].product_name, "Laptop");

    Ok(())
}

#[tokio::test]
async fn completed_orders_filter_matches_status_exactly() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::orders_with_status(&state, "Completed").await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|row| row.status == "Completed"));

    Ok(())
}

#[tokio::test]
async fn march_orders_are_returned_oldest_first() -> anyhow::Result<()> {
    let state = setup().await?;

    let from = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let to_exclusive = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
    let resp = report_service::orders_between(&state, from, to_exclusive).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].customer_name, "Alice Johnson");
    assert_eq!(items[1].customer_name, "Bob Martinez");

    Ok(())
}

#[tokio::test]
async fn low_stock_report_honors_threshold_and_category() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::low_stock(&state, 50, None).await?;
    let items = resp.data.expect("rows").items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].product_name, "Phone");
    assert_eq!(items[1].product_name, "Olive Oil");

    // The electronics row below 20 units is exactly the phone.
    let resp = report_service::low_stock(&state, 20, Some("Electronics")).await?;
    let items = resp.data.expect("rows").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_name, "Phone");
    assert_eq!(items[0].quantity_in_stock, 10);
    assert_eq!(items[0].warehouse_location, "Singapore Hub");

    Ok(())
}

#[tokio::test]
async fn heavy_shipments_sorted_by_weight_descending() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::heavy_shipments(&state, 1000.0).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].supplier_name, "Nordic Timber");
    assert_eq!(items[0].weight, 1890.0);
    assert_eq!(items[1].weight, 1250.5);

    Ok(())
}

#[tokio::test]
async fn received_shipments_filter() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::received_shipments(&state).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|row| row.status == "Received"));

    Ok(())
}

#[tokio::test]
async fn shipped_movements_filter() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::shipped_movements(&state).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|row| row.movement_type == "Shipped"));
    let mut names: Vec<&str> = items.iter().map(|row| row.product_name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Oak Desk", "Phone"]);

    Ok(())
}

#[tokio::test]
async fn line_totals_above_threshold_use_derived_value() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::order_line_totals_above(&state, 500).await?;
    let items = resp.data.expect("rows").items;

    // 3 phones at 200 each is the only line above 500.
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].customer_name, "Alice Johnson");
    assert_eq!(items[0].product_name, "Phone");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].unit_price, 200);
    assert_eq!(items[0].line_total, 600);

    Ok(())
}

#[tokio::test]
async fn products_sort_by_unit_price_both_directions() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::products_by_price(&state, SortOrder::Asc).await?;
    let items = resp.data.expect("rows").items;
    assert_eq!(items.first().map(|p| p.name.as_str()), Some("Olive Oil"));
    assert_eq!(items.last().map(|p| p.name.as_str()), Some("Laptop"));

    let resp = report_service::products_by_price(&state, SortOrder::Desc).await?;
    let items = resp.data.expect("rows").items;
    assert_eq!(items.first().map(|p| p.name.as_str()), Some("Laptop"));
    assert_eq!(items.last().map(|p| p.name.as_str()), Some("Olive Oil"));

    Ok(())
}

#[tokio::test]
async fn distinct_projections_deduplicate() -> anyhow::Result<()> {
    let state = setup().await?;

    // Two electronics inventory rows collapse into one category value.
    let resp = report_service::distinct_stocked_categories(&state).await?;
    let values = resp.data.expect("rows").values;
    assert_eq!(values, ["Electronics", "Furniture", "Grocery"]);

    // Two European suppliers collapse into one region value.
    let resp = report_service::distinct_supplier_regions(&state).await?;
    let values = resp.data.expect("rows").values;
    assert_eq!(values, ["Asia", "Europe"]);

    Ok(())
}

#[tokio::test]
async fn supplier_catalog_resolves_join_table() -> anyhow::Result<()> {
    let state = setup().await?;

    let resp = report_service::supplier_catalog(&state).await?;
    let items = resp.data.expect("rows").items;

    assert_eq!(items.len(), 4);
    assert_eq!(items[0].supplier_name, "ElectroWorld");
    assert!(
        items
            .iter()
            .any(|row| row.supplier_name == "GreenFarm Produce" && row.product_name == "Olive Oil")
    );

    Ok(())
}

async fn setup() -> anyhow::Result<AppState> {
    let conn = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&conn).await?;
    seed_demo_data(&conn).await?;
    Ok(AppState { orm: conn })
}
