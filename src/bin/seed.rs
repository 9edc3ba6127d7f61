use coffee_catalog::config::{AppConfig, ConfigService};
use coffee_catalog::infrastructure::Database;
use coffee_catalog::modules::product::SeaOrmProductGateway;
use coffee_catalog::modules::product::seed::{sample_products, seed_products};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_config(&ConfigService::from_env())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database = Arc::new(Database::connect(&config).await?);
    database.sync_schema().await?;

    let samples = sample_products(config.seed_count, &mut rand::rng(), chrono::Utc::now());
    let gateway = SeaOrmProductGateway::new(Arc::clone(&database));
    let outcome = seed_products(&gateway, samples).await;

    // Close the pool whether or not seeding went through.
    database.close().await?;
    let created = outcome?;

    tracing::info!(created, requested = config.seed_count, "🌱 Seeding complete");
    Ok(())
}
