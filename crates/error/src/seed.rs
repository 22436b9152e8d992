//! # Seed Results
//!
//! Outcome of loading one table from a CSV export.

/// Seed operation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedResult {
    /// Seed name for logging
    pub seed_name:      String,
    /// Number of records inserted
    pub inserted_count: usize,
    /// Number of records that failed to parse or were rejected by the store
    pub rejected_count: usize,
    /// Duration of the seed operation in milliseconds
    pub duration_ms:    u64,
    /// Messages for rejected records, capped at [`SeedResult::MAX_ERRORS`]
    pub errors:         Vec<String>,
}

impl SeedResult {
    /// Maximum number of rejection messages kept per seed.
    pub const MAX_ERRORS: usize = 100;

    /// Creates an empty result for the named seed
    #[must_use]
    pub fn new(seed_name: &str) -> Self {
        Self {
            seed_name:      seed_name.to_string(),
            inserted_count: 0,
            rejected_count: 0,
            duration_ms:    0,
            errors:         Vec::new(),
        }
    }

    /// Records one inserted row
    pub fn record_inserted(&mut self) { self.inserted_count += 1; }

    /// Records one rejected row
    pub fn record_rejected(&mut self, error: impl ToString) {
        self.rejected_count += 1;
        if self.errors.len() < Self::MAX_ERRORS {
            self.errors.push(error.to_string());
        }
    }

    /// Total number of records seen
    #[must_use]
    pub fn total(&self) -> usize { self.inserted_count + self.rejected_count }

    /// Returns true if no record was rejected
    #[must_use]
    pub fn is_success(&self) -> bool { self.rejected_count == 0 }
}
