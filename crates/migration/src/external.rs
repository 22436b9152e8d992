//! # External Tables
//!
//! `orders` and `sellers` are referenced by this schema but owned elsewhere.
//! Only their string primary keys are assumed. Migrations that declare
//! foreign keys into them check that they exist first, so a missing parent
//! table fails with a readable migration error instead of a driver message.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend};
use sea_orm_migration::prelude::*;

/// Tables this schema references but does not create.
pub const EXTERNAL_TABLES: [&str; 2] = ["orders", "sellers"];

// Reference to the external orders table
#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderId,
}

// Reference to the external sellers table
#[derive(DeriveIden)]
pub enum Sellers {
    Table,
    SellerId,
}

/// Creates the UUID generation extension on PostgreSQL.
///
/// No declared column uses it; it is created so the schema matches the
/// source definitions. Other backends skip this step.
pub async fn create_uuid_extension(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    if manager.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    manager
        .get_connection()
        .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .await?;

    Ok(())
}

/// Fails with `DbErr::Migration` unless `table` exists.
pub async fn require_table(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    if manager.has_table(table).await? {
        return Ok(());
    }

    Err(DbErr::Migration(format!(
        "required external table `{}` does not exist",
        table
    )))
}

/// Lists the external tables missing from the connected database.
pub async fn missing_external_tables(db: &DatabaseConnection) -> Result<Vec<&'static str>, DbErr> {
    let manager = SchemaManager::new(db);
    let mut missing = Vec::new();
    for table in EXTERNAL_TABLES {
        if !manager.has_table(table).await? {
            missing.push(table);
        }
    }
    Ok(missing)
}
