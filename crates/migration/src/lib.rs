//! # Olist Order Schema Migrations
//!
//! Schema-as-code for the `products`, `reviews`, `payments` and
//! `order_items` tables, plus CSV seeds that bulk-load them.

pub use sea_orm_migration::prelude::*;

pub mod db;
pub mod external;
pub mod migrator;
pub mod seeds;

mod m20240101_000001_create_products_table;
mod m20240101_000002_create_reviews_table;
mod m20240101_000003_create_payments_table;
mod m20240101_000004_create_order_items_table;

use ::error::AppError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub use crate::{
    db::{DatabaseConfig, SslMode},
    migrator::{MigrationState, Migrator},
};

/// Database connection handle shared by the migrator, seeds and CLI.
#[derive(Debug, Clone)]
pub struct SeaDb {
    /// The underlying Sea-ORM connection
    pub inner: DatabaseConnection,
}

impl SeaDb {
    /// Connects to the given URL with default pool options.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn from_connection_string(url: &str) -> Result<Self, AppError> {
        Self::connect(db::connect_options(url, DatabaseConfig::new().pool_size, 30)).await
    }

    /// Connects with explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(options: ConnectOptions) -> Result<Self, AppError> {
        let inner = Database::connect(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))?;
        tracing::debug!(backend = ?inner.get_database_backend(), "Database connection established");
        Ok(Self {
            inner,
        })
    }

    /// Get a reference to the database connection
    pub fn connection(&self) -> &DatabaseConnection { &self.inner }
}
