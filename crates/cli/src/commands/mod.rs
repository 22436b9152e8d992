//! # CLI Commands
//!
//! Implementation of CLI commands for the Olist schema tool.

pub mod completions;
pub mod load;
pub mod migrate;
pub mod status;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands for the Olist CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate(MigrateArgs),

    /// Show applied and pending migrations
    Status,

    /// Bulk-load the tables from the CSV exports
    Load(LoadArgs),

    /// Verify configuration, connectivity and external tables
    Validate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Directory holding the CSV exports (defaults to OLIST_DATA_DIR or ./data)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
