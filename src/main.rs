use anyhow::Context;
use coffee_catalog::AppModule;
use coffee_catalog::config::{AppConfig, ConfigService};
use coffee_catalog::di::ContainerBuilder;
use coffee_catalog::infrastructure::Database;
use coffee_catalog::lifecycle::shutdown_signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_config(&ConfigService::from_env())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🚀 Starting coffee catalog...");

    // 1. Open the store and make sure the schema exists
    let database = Database::connect(&config)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    database.sync_schema().await?;

    // 2. Build container: infrastructure first, then AppModule binds and registers the rest
    let container = ContainerBuilder::new()
        .register(database)
        .import::<AppModule>()?
        .build();

    // 3. Create Router
    let router = AppModule::router(&container)?;

    // 4. Start server with graceful shutdown
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("✅ Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await?;

    container.resolve::<Database>()?.close().await?;
    tracing::info!("👋 Server stopped");
    Ok(())
}
