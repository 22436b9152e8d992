//! # CLI Configuration
//!
//! Configuration handling for the CLI, reading from environment variables.

use std::path::PathBuf;

use error::Result;
use migration::DatabaseConfig;

/// Default directory holding the CSV exports
pub const DEFAULT_DATA_DIR: &str = "data";

/// Configuration for the CLI
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Directory holding the CSV exports
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables.
    ///
    /// Returns `Err` if any environment variable has an invalid format.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database: migration::db::load_config_from_env()?,
            data_dir: std::env::var("OLIST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }

    /// Replaces the data directory when one is given
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        unsafe {
            std::env::remove_var("OLIST_DATA_DIR");
            std::env::remove_var("OLIST_DATABASE_PORT");
            std::env::remove_var("OLIST_DATABASE_URL");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    #[serial]
    fn test_from_env_data_dir() {
        unsafe {
            std::env::set_var("OLIST_DATA_DIR", "/srv/olist");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/olist"));

        unsafe {
            std::env::remove_var("OLIST_DATA_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        unsafe {
            std::env::set_var("OLIST_DATABASE_PORT", "99999");
        }

        let err = AppConfig::from_env().unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");

        unsafe {
            std::env::remove_var("OLIST_DATABASE_PORT");
        }
    }

    #[test]
    fn test_with_data_dir_override() {
        let config = AppConfig {
            database: DatabaseConfig::new(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        };

        let config = config.with_data_dir(None);
        assert_eq!(config.data_dir, PathBuf::from("data"));

        let config = config.with_data_dir(Some(PathBuf::from("fixtures")));
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
    }
}
