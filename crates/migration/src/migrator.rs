//! # Database Migrator
//!
//! This module implements the Sea-ORM migrator trait for the order schema.
//! The migrator applies the table migrations in order and records them in
//! the migration history table, so re-running it is a no-op.

use sea_orm::ConnectionTrait;
use sea_orm_migration::{MigrationStatus, prelude::*};

use crate::{
    m20240101_000001_create_products_table, m20240101_000002_create_reviews_table,
    m20240101_000003_create_payments_table, m20240101_000004_create_order_items_table,
};

/// The main migrator that coordinates all migration operations
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    /// Parents come before children: `order_items` references `products`.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_products_table::Migration),
            Box::new(m20240101_000002_create_reviews_table::Migration),
            Box::new(m20240101_000003_create_payments_table::Migration),
            Box::new(m20240101_000004_create_order_items_table::Migration),
        ]
    }
}

/// Applied state of one migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    /// Migration name
    pub name:    String,
    /// Whether the migration is recorded as applied
    pub applied: bool,
}

/// Returns every known migration with its applied state, in run order.
///
/// # Errors
///
/// Returns an error if the migration history table cannot be read.
pub async fn migration_states<C>(db: &C) -> Result<Vec<MigrationState>, DbErr>
where
    C: ConnectionTrait,
{
    Ok(Migrator::get_migration_with_status(db)
        .await?
        .iter()
        .map(|m| {
            MigrationState {
                name:    m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            }
        })
        .collect())
}

/// Names of migrations not yet applied, in run order.
///
/// # Errors
///
/// Returns an error if the migration history table cannot be read.
pub async fn pending_migration_names<C>(db: &C) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    Ok(Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect())
}
