//! # CLI Load Command
//!
//! Bulk-loads the tables from the Olist CSV exports.

use std::path::Path;

use error::{Result, SeedResult};
use migration::SeaDb;
use tracing::info;

/// Runs every seed against `data_dir` and prints one summary line per seed.
///
/// # Errors
///
/// Returns an error if a CSV export is missing or unreadable. Rejected rows
/// do not fail the command.
pub async fn load(db: &SeaDb, data_dir: &Path) -> Result<Vec<SeedResult>> {
    info!(target: "seed", data_dir = %data_dir.display(), "Loading CSV exports...");

    let results = migration::seeds::run_all_seeds(db, data_dir).await?;
    for result in &results {
        println!("{}", summary_line(result));
    }

    let rejected: usize = results.iter().map(|r| r.rejected_count).sum();
    info!(target: "seed", rejected = %rejected, "Load complete");
    Ok(results)
}

/// Summary of one seed run.
pub fn summary_line(result: &SeedResult) -> String {
    format!(
        "{:<12} inserted={} rejected={} ({} ms)",
        result.seed_name, result.inserted_count, result.rejected_count, result.duration_ms
    )
}
