//! # Olist CLI
//!
//! Command-line interface for the Olist order schema.
//!
//! ## Usage
//!
//! ```bash
//! olist migrate             # Apply pending migrations
//! olist migrate --dry-run   # List pending migrations
//! olist status              # Show applied/pending migrations
//! olist load -d ./data      # Bulk-load the CSV exports
//! olist --help              # Show help
//! ```

mod commands;
mod config;

use clap::{CommandFactory as _, Parser};
use error::{Result, ResultExt};

use crate::{
    commands::{Commands, completions::completions, load::load, migrate::migrate, status::status, validate::validate},
    config::AppConfig,
};

/// Olist order schema - migrations and bulk loading
#[derive(Parser, Debug)]
#[command(name = "olist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short = 'f', long, env = "OLIST_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Held until exit so the file writer flushes
    let _guard = logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Olist CLI starting...");

    run(cli.command).await.log_error()?;

    logging::info!(target: "app", "Olist CLI completed successfully");
    Ok(())
}

/// Dispatches one subcommand.
async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Completions(args) => completions(args.shell, &mut Cli::command(), &mut std::io::stdout())?,
        Commands::Validate => validate(&AppConfig::from_env()?).await?,
        Commands::Migrate(args) => {
            let db = AppConfig::from_env()?.database.connect().await?;
            migrate(&db, &args).await?;
        },
        Commands::Status => {
            let db = AppConfig::from_env()?.database.connect().await?;
            status(&db).await?;
        },
        Commands::Load(args) => {
            let config = AppConfig::from_env()?.with_data_dir(args.data_dir);
            let db = config.database.connect().await?;
            load(&db, &config.data_dir).await?;
        },
    }

    Ok(())
}
