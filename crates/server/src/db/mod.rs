//! Database operations for the shop `PostgreSQL` store.
//!
//! # Tables
//!
//! - `product_categories` - Catalog sections, unique by name
//! - `products` - Catalog entries with price and stock
//! - `users` - Customer accounts, unique by email
//! - `orders` - Orders with status and pickup method
//! - `order_items` - Product lines of an order
//! - `payments` - Payments recorded against orders
//! - `cart_items` - Per-user shopping carts
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p shop-cli -- migrate
//! ```
//!
//! # Usage
//!
//! [`Repository`] owns the pool and hands out one short-lived repository
//! per entity:
//!
//! ```rust,ignore
//! let repo = Repository::connect(&config.database).await?;
//! let flowers = repo.categories().create(&NewCategory::named("flowers")).await?;
//! let products = repo.products().list_by_category(flowers.id).await?;
//! ```
//!
//! Every call is an independent statement on a pooled connection. Dropping
//! the returned future cancels it; wrap it in `tokio::time::timeout` for a
//! deadline.

mod cart_items;
mod categories;
mod error;
mod orders;
mod payments;
mod products;
mod users;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

pub use cart_items::CartItemRepository;
pub use categories::CategoryRepository;
pub use error::{ErrorKind, RepositoryError, constraint};
pub use orders::{OrderItemRepository, OrderRepository};
pub use payments::PaymentRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use crate::config::DatabaseConfig;

/// Create a `PostgreSQL` connection pool from configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect(config.url.expose_secret())
        .await
}

/// Create a pool that opens connections on first use.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(config.url.expose_secret())
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Entry point to every table of the shop store.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the database is unreachable.
    #[instrument(skip(config))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        create_pool(config).await.map(Self::new)
    }

    /// Check that the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if no connection can be acquired or the probe
    /// fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection and wait for them to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[must_use]
    pub const fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn order_items(&self) -> OrderItemRepository<'_> {
        OrderItemRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn cart_items(&self) -> CartItemRepository<'_> {
        CartItemRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn payments(&self) -> PaymentRepository<'_> {
        PaymentRepository::new(&self.pool)
    }
}
