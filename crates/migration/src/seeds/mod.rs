//! # Seed Data Management
//!
//! This module bulk-loads the schema's tables from the Olist CSV exports.
//! Each table has one seed provider; records are inserted one statement at a
//! time so a single bad record is counted and skipped instead of aborting the
//! load.

pub mod rows;

use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
    time::Instant,
};

use ::error::{AppError, ResultExt, SeedResult};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

pub use self::rows::{OrderItemRow, PaymentRow, ProductRow, ReviewRow, SeedRow};
use crate::SeaDb;

pub const PRODUCTS_FILE: &str = "olist_products_dataset.csv";
pub const REVIEWS_FILE: &str = "olist_order_reviews_dataset.csv";
pub const PAYMENTS_FILE: &str = "olist_order_payments_dataset.csv";
pub const ORDER_ITEMS_FILE: &str = "olist_order_items_dataset.csv";

/// Trait for seed data providers
///
/// Implement this trait to provide seed data for the database.
#[async_trait::async_trait]
pub trait SeedProvider: Send + Sync {
    /// The name of this seed
    fn name(&self) -> &str;

    /// Runs the seed operation
    ///
    /// # Arguments
    ///
    /// * `db` - The database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read. Rejected records are
    /// reported through the returned [`SeedResult`].
    async fn run(&self, db: &SeaDb) -> Result<SeedResult, AppError>;
}

/// Loads one table from a CSV file.
#[derive(Debug)]
pub struct CsvSeed<R> {
    name: String,
    path: PathBuf,
    _row: PhantomData<fn() -> R>,
}

impl<R> CsvSeed<R> {
    /// Creates a seed named `name` reading from `path`
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            path: path.into(),
            _row: PhantomData,
        }
    }

    /// The CSV file this seed reads
    pub fn path(&self) -> &Path { &self.path }
}

#[async_trait::async_trait]
impl<R> SeedProvider for CsvSeed<R>
where
    R: SeedRow + 'static,
    <<R::Active as ActiveModelTrait>::Entity as EntityTrait>::Model: IntoActiveModel<R::Active>,
{
    fn name(&self) -> &str { &self.name }

    async fn run(&self, db: &SeaDb) -> Result<SeedResult, AppError> {
        let started = Instant::now();
        let mut result = SeedResult::new(&self.name);

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .context(format!("Failed to open {}", self.path.display()))?;
        let headers = reader.headers()?.clone();

        let mut record = csv::StringRecord::new();
        loop {
            let line = reader.position().line();
            match reader.read_record(&mut record) {
                Ok(true) => {},
                Ok(false) => break,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    logging::log_rejected_row!(self.name, line, e);
                    result.record_rejected(format!("line {}: {}", line, e));
                    continue;
                },
            }

            let active = record
                .deserialize::<R>(Some(&headers))
                .map_err(AppError::from)
                .and_then(R::into_active);
            let active = match active {
                Ok(active) => active,
                Err(e) => {
                    logging::log_rejected_row!(self.name, line, e);
                    result.record_rejected(format!("line {}: {}", line, e));
                    continue;
                },
            };

            match <R::Active as ActiveModelTrait>::Entity::insert(active)
                .exec_without_returning(db.connection())
                .await
            {
                Ok(_) => result.record_inserted(),
                Err(e) => {
                    let e = AppError::from(e);
                    logging::log_rejected_row!(self.name, line, e);
                    result.record_rejected(format!("line {}: {}", line, e));
                },
            }
        }

        result.duration_ms = started.elapsed().as_millis() as u64;
        logging::log_seed_result!(result);
        Ok(result)
    }
}

/// Seed providers for every table, parents before children.
pub fn providers(data_dir: &Path) -> Vec<Box<dyn SeedProvider>> {
    vec![
        Box::new(CsvSeed::<ProductRow>::new("products", data_dir.join(PRODUCTS_FILE))),
        Box::new(CsvSeed::<ReviewRow>::new("reviews", data_dir.join(REVIEWS_FILE))),
        Box::new(CsvSeed::<PaymentRow>::new("payments", data_dir.join(PAYMENTS_FILE))),
        Box::new(CsvSeed::<OrderItemRow>::new("order_items", data_dir.join(ORDER_ITEMS_FILE))),
    ]
}

/// Runs all registered seed providers
///
/// # Arguments
///
/// * `db` - The database connection
/// * `data_dir` - Directory holding the CSV exports
///
/// # Errors
///
/// Returns the first error that aborts a seed (for example a missing file).
/// Seeds that ran before it keep their inserted rows.
pub async fn run_all_seeds(db: &SeaDb, data_dir: &Path) -> Result<Vec<SeedResult>, AppError> {
    let mut results = Vec::new();

    for provider in providers(data_dir) {
        tracing::info!(target: "seed", seed = provider.name(), "Running seed");
        let result = provider
            .run(db)
            .await
            .context(format!("Seed {} failed", provider.name()))?;
        results.push(result);
    }

    Ok(results)
}
