//! # CLI Migration Command
//!
//! Database migration handling for the Olist CLI.

use error::Result;
use migration::{MigratorTrait as _, SeaDb};
use tracing::info;

use crate::commands::MigrateArgs;

/// Runs database migrations
///
/// # Arguments
///
/// * `db` - Database connection
/// * `args` - Migrate command arguments
///
/// # Returns
///
/// The names of the migrations that were pending before the run. In dry-run
/// mode nothing is applied.
pub async fn migrate(db: &SeaDb, args: &MigrateArgs) -> Result<Vec<String>> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        "Running database migrations..."
    );

    let pending = migration::migrator::pending_migration_names(db.connection()).await?;

    info!(
        target: "migrate",
        pending_count = %pending.len(),
        "Pending migrations found"
    );

    if args.dry_run {
        // Dry run mode - just show what would happen
        for name in &pending {
            info!(target: "migrate", migration = %name, "Would apply");
            println!("{}", name);
        }
        return Ok(pending);
    }

    migration::Migrator::up(db.connection(), None).await?;

    info!(target: "migrate", applied = %pending.len(), "Migrations completed successfully");
    Ok(pending)
}
