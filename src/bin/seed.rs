use axum_supplychain_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_demo_data,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let summary = seed_demo_data(&orm).await?;
    println!(
        "Seed completed: {} suppliers, {} customers, {} products, {} orders, {} shipments",
        summary.suppliers, summary.customers, summary.products, summary.orders, summary.shipments
    );
    Ok(())
}
