//! # CLI Status Command

use error::Result;
use migration::{MigrationState, SeaDb};

/// Prints each migration with `applied` or `pending`, in run order.
pub async fn status(db: &SeaDb) -> Result<Vec<MigrationState>> {
    let states = migration::migrator::migration_states(db.connection()).await?;
    for line in format_status(&states) {
        println!("{}", line);
    }
    Ok(states)
}

/// One line per migration.
pub fn format_status(states: &[MigrationState]) -> Vec<String> {
    states
        .iter()
        .map(|state| {
            format!(
                "{:<45} {}",
                state.name,
                if state.applied { "applied" } else { "pending" }
            )
        })
        .collect()
}
