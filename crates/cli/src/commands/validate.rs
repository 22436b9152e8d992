//! # CLI Validate Command
//!
//! Configuration validation for the Olist CLI.

use error::{AppError, Result};
use migration::SeaDb;
use tracing::info;

use crate::config::AppConfig;

/// Validates the CLI configuration
///
/// Connects with `config` and checks that the external `orders` and
/// `sellers` tables exist.
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn validate(config: &AppConfig) -> Result<()> {
    info!(
        target: "validate",
        url = %config.database.redacted_connection_string(),
        data_dir = %config.data_dir.display(),
        "Validating configuration..."
    );

    let db = config.database.connect().await?;
    check_external_tables(&db).await?;

    if !config.data_dir.is_dir() {
        tracing::warn!(target: "validate", data_dir = %config.data_dir.display(), "Data directory not found");
    }

    info!(target: "validate", "Configuration is valid");
    Ok(())
}

/// Fails with `AppError::Validation` naming every missing external table.
pub async fn check_external_tables(db: &SeaDb) -> Result<()> {
    let missing = migration::external::missing_external_tables(db.connection()).await?;
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing external tables: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}
