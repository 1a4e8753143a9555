use storefront_api::{
    config::AppConfig,
    db::{Store, bootstrap},
    services::product_service,
};

/// Prepare the database (schema, missing columns, seed catalog) without starting the server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let store = Store::connect(&config.database_url).await?;
    bootstrap(&store).await?;
    let products = product_service::list_products(&store).await?;
    println!(
        "Database ready at {} ({} products)",
        config.database_url,
        products.len()
    );
    Ok(())
}
