//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! shop-cli migrate
//! ```
//!
//! Connection settings come from the shop configuration (`configs/config.yml`
//! plus `SHOP_DATABASE_*` or `DATABASE_URL`).
//!
//! # Migration Files
//!
//! ```text
//! crates/server/migrations/
//! ├── 20250301000001_create_catalog.sql
//! ├── 20250301000002_create_users.sql
//! ├── 20250301000003_create_orders.sql
//! └── 20250301000004_create_cart_items.sql
//! ```

use shop_server::config::{ConfigError, ShopConfig};
use shop_server::db;

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply every pending migration to the shop database.
///
/// # Errors
///
/// Returns `MigrationError` if configuration is incomplete, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let config = ShopConfig::load()?;

    tracing::info!("Connecting to shop database...");
    let pool = db::create_pool(&config.database).await?;

    tracing::info!("Running shop migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Shop migrations complete!");
    pool.close().await;
    Ok(())
}
