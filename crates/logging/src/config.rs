//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{Registry, filter::LevelFilter, fmt, prelude::*};

/// Boxed subscriber produced by [`LoggingConfig::build`].
pub type BoxedSubscriber = Box<dyn tracing::Subscriber + Send + Sync>;

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

/// Keeps the background file writer alive.
#[derive(Debug, Default)]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Returns true when a log file writer is attached.
    pub fn has_file_writer(&self) -> bool { self.file_guard.is_some() }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG`, `OLIST_LOG_FORMAT`, `OLIST_LOG_FILE` and `OLIST_ENV`
    /// take precedence over the arguments.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format:      std::env::var("OLIST_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
            log_file:    std::env::var("OLIST_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("OLIST_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// Parsed level filter, falling back to INFO.
    pub fn level_filter(&self) -> LevelFilter { self.level.parse().unwrap_or(LevelFilter::INFO) }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> (BoxedSubscriber, LoggingGuard) {
        let level = self.level_filter();

        match self.format.as_str() {
            "pretty" => (self.build_pretty_subscriber(level), LoggingGuard::default()),
            "compact" => (self.build_compact_subscriber(level), LoggingGuard::default()),
            _ => self.build_json_subscriber(level),
        }
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self, level: LevelFilter) -> (BoxedSubscriber, LoggingGuard) {
        let stdout_layer = fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339());

        if let Some(ref log_file) = self.log_file {
            let path = PathBuf::from(log_file);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_default().to_string_lossy();
            let file_appender = tracing_appender::rolling::hourly(directory, file_name.as_ref());
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking);
            let subscriber = Registry::default()
                .with(level)
                .with(stdout_layer)
                .with(file_layer);
            (
                Box::new(subscriber),
                LoggingGuard {
                    file_guard: Some(guard),
                },
            )
        }
        else {
            (
                Box::new(Registry::default().with(level).with(stdout_layer)),
                LoggingGuard::default(),
            )
        }
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self, level: LevelFilter) -> BoxedSubscriber {
        let subscriber = fmt::layer()
            .pretty()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }

    /// Build a compact subscriber for testing.
    fn build_compact_subscriber(&self, level: LevelFilter) -> BoxedSubscriber {
        let subscriber = fmt::layer()
            .compact()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(level).with(subscriber))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_config_from_arguments() {
        unsafe {
            std::env::remove_var("RUST_LOG");
            std::env::remove_var("OLIST_LOG_FORMAT");
            std::env::remove_var("OLIST_ENV");
        }

        let config = LoggingConfig::from_env("info", "json", None);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
        assert_eq!(config.environment, "development");
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        // Safe in test context - serialised with other env-reading tests
        unsafe {
            std::env::set_var("RUST_LOG", "debug");
            std::env::set_var("OLIST_LOG_FORMAT", "pretty");
        }

        let config = LoggingConfig::from_env("info", "json", None);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, "pretty");

        unsafe {
            std::env::remove_var("RUST_LOG");
            std::env::remove_var("OLIST_LOG_FORMAT");
        }
    }

    #[test]
    fn test_level_filter_fallback() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_build_json_subscriber_without_file() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        let (_subscriber, guard) = config.build();
        assert!(!guard.has_file_writer());
    }

    #[test]
    fn test_build_pretty_subscriber() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
            ..Default::default()
        };
        let (_subscriber, guard) = config.build();
        assert!(!guard.has_file_writer());
    }
}
