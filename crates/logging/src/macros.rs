//! # Logging Macros
//!
//! Convenience macros for structured logging of schema operations.

/// Log the outcome of a seed run.
///
/// # Example
///
/// ```rust
/// struct Outcome { seed_name: String, inserted_count: usize, rejected_count: usize, duration_ms: u64 }
///
/// let result = Outcome { seed_name: "products".into(), inserted_count: 10, rejected_count: 0, duration_ms: 4 };
/// logging::log_seed_result!(result);
/// ```
#[macro_export]
macro_rules! log_seed_result {
    ($result:expr) => {
        $crate::info!(
            target: "seed",
            seed = %$result.seed_name,
            inserted = $result.inserted_count,
            rejected = $result.rejected_count,
            duration_ms = $result.duration_ms,
            "Seed finished"
        )
    };
}

/// Log a row rejected by the store.
#[macro_export]
macro_rules! log_rejected_row {
    ($table:expr, $line:expr, $err:expr) => {
        $crate::debug!(
            target: "seed",
            table = %$table,
            line = $line,
            error = %$err,
            "Row rejected"
        )
    };
}

/// Log a migration step.
#[macro_export]
macro_rules! log_migration_step {
    ($migration:expr, $step:expr) => {
        $crate::info!(
            target: "migrate",
            migration = %$migration,
            step = %$step,
            "Migration step"
        )
    };
}
