use crate::config::AppConfig;
use crate::error::Result;
use crate::modules::product::entity;
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, Schema};
use std::time::Duration;

/// Shared handle to the relational store
///
/// Wraps the sea-orm connection pool. Cloning is cheap: clones share the pool.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        Self::connect_url(&config.database_url).await
    }

    pub async fn connect_url(url: &str) -> Result<Self> {
        tracing::info!("📦 Database: Initializing connection pool...");

        let mut options = ConnectOptions::new(url.to_owned());
        options
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);
        // Every connection to an in-memory SQLite database sees its own empty store.
        if url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let conn = sea_orm::Database::connect(options).await?;
        tracing::info!("✅ Database: Connection pool initialized");
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the tables the catalog needs when they do not exist yet.
    pub async fn sync_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut products = schema.create_table_from_entity(entity::Entity);
        products.if_not_exists();
        self.conn.execute(backend.build(&products)).await?;

        tracing::info!("✅ Database: Schema is up to date");
        Ok(())
    }

    pub async fn close(&self) -> Result<()> {
        tracing::info!("📦 Database: Closing connection pool...");
        self.conn.clone().close().await?;
        tracing::info!("✅ Database: Connection pool closed");
        Ok(())
    }
}
