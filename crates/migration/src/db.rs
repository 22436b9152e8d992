//! # Database Connection Management
//!
//! This module provides database connection utilities and management functions
//! for establishing connections using Sea-ORM. PostgreSQL is the target store;
//! any URL Sea-ORM understands (including `sqlite::memory:`) can be supplied
//! through `OLIST_DATABASE_URL`.

use std::{str::FromStr, time::Duration};

use ::error::AppError;
use sea_orm::ConnectOptions;

use crate::SeaDb;

/// Database connection configuration
///
/// This struct holds all configuration options for establishing a database connection.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Full connection URL; when set, the individual fields are ignored
    pub url:             Option<String>,
    /// Database host address
    pub host:            String,
    /// Database port number
    pub port:            u16,
    /// Database name
    pub database:        String,
    /// Database username
    pub username:        String,
    /// Database password
    pub password:        String,
    /// SSL mode for connection
    pub ssl_mode:        SslMode,
    /// Maximum connections in pool
    pub pool_size:       u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

/// SSL mode options for PostgreSQL connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// No SSL - only use for development
    Disable,
    /// Prefer SSL if available
    #[default]
    Prefer,
    /// Require SSL connection
    Require,
    /// Verify SSL certificate
    VerifyCa,
    /// Verify full SSL certificate chain
    VerifyFull,
}

impl SslMode {
    /// Converts the SSL mode to a PostgreSQL connection string value
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(AppError::config(format!("Invalid SSL mode: {}", other))),
        }
    }
}

impl DatabaseConfig {
    /// Creates a new configuration with default values
    ///
    /// # Returns
    ///
    /// A new `DatabaseConfig` with default host (localhost), port (5432),
    /// and empty credentials.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url:             None,
            host:            "localhost".to_string(),
            port:            5432,
            database:        "olist".to_string(),
            username:        "olist".to_string(),
            password:        String::new(),
            ssl_mode:        SslMode::Prefer,
            pool_size:       10,
            connect_timeout: 30,
        }
    }

    /// Sets a full connection URL, overriding the individual fields
    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Sets the database host
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Sets the database port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the database name
    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    /// Sets the database username
    #[must_use]
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    /// Sets the database password
    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Sets the SSL mode
    #[must_use]
    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    /// Sets the connection pool size
    ///
    /// # Arguments
    ///
    /// * `pool_size` - Maximum number of connections in the pool
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets the connection timeout
    ///
    /// # Arguments
    ///
    /// * `timeout` - Connection timeout in seconds
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builds the connection string
    ///
    /// Returns the explicit URL when one is configured, otherwise a
    /// PostgreSQL URL with percent-encoded credentials.
    #[must_use]
    pub fn build_connection_string(&self) -> String {
        if let Some(ref url) = self.url {
            return url.clone();
        }
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            percent_encode_userinfo(&self.username),
            percent_encode_userinfo(&self.password),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Connection string with the password masked, for logs.
    #[must_use]
    pub fn redacted_connection_string(&self) -> String {
        if self.url.is_some() {
            return "<OLIST_DATABASE_URL>".to_string();
        }
        format!(
            "postgres://{}:***@{}:{}/{}?sslmode={}",
            percent_encode_userinfo(&self.username),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Creates a database connection from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(&self) -> Result<SeaDb, AppError> {
        tracing::info!(url = %self.redacted_connection_string(), "Connecting to database");
        SeaDb::connect(connect_options(
            &self.build_connection_string(),
            self.pool_size,
            self.connect_timeout,
        ))
        .await
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self { Self::new() }
}

/// Builds Sea-ORM connection options.
///
/// An in-memory SQLite database lives inside a single connection, so the
/// pool is pinned to one connection for such URLs.
pub fn connect_options(url: &str, pool_size: u32, connect_timeout: u64) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .connect_timeout(Duration::from_secs(connect_timeout))
        .sqlx_logging(false);

    if url.starts_with("sqlite") && url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    else {
        options.max_connections(pool_size);
    }
    options
}

/// Percent-encoding for username/password in connection URIs.
///
/// Everything except unreserved characters (`A-Z a-z 0-9 - _ . ~`) is
/// encoded as UTF-8 bytes.
pub fn percent_encode_userinfo(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut result = String::with_capacity(s.len().saturating_mul(3));
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            result.push(byte as char);
        }
        else {
            result.push('%');
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    result
}

/// Loads database configuration from environment variables
///
/// Reads the following environment variables:
/// - `OLIST_DATABASE_URL` (optional, overrides everything below)
/// - `OLIST_DATABASE_HOST` (default: "localhost")
/// - `OLIST_DATABASE_PORT` (default: "5432")
/// - `OLIST_DATABASE_NAME` (default: "olist")
/// - `OLIST_DATABASE_USER` (default: "olist")
/// - `OLIST_DATABASE_PASSWORD` (default: "")
/// - `OLIST_DATABASE_SSL_MODE` (default: "prefer")
/// - `OLIST_DATABASE_POOL_SIZE` (default: "10")
/// - `OLIST_DATABASE_CONNECT_TIMEOUT` (default: "30")
///
/// # Errors
///
/// Returns `AppError::Config` if a numeric value or the SSL mode cannot be parsed.
pub fn load_config_from_env() -> Result<DatabaseConfig, AppError> {
    let get_env = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());

    fn parse_env<T: FromStr>(key: &str, value: String) -> Result<T, AppError> {
        value
            .parse()
            .map_err(|_| AppError::config(format!("Invalid value for {}: {}", key, value)))
    }

    let mut config = DatabaseConfig::new()
        .with_host(&get_env("OLIST_DATABASE_HOST", "localhost"))
        .with_port(parse_env(
            "OLIST_DATABASE_PORT",
            get_env("OLIST_DATABASE_PORT", "5432"),
        )?)
        .with_database(&get_env("OLIST_DATABASE_NAME", "olist"))
        .with_username(&get_env("OLIST_DATABASE_USER", "olist"))
        .with_password(&get_env("OLIST_DATABASE_PASSWORD", ""))
        .with_ssl_mode(get_env("OLIST_DATABASE_SSL_MODE", "prefer").parse()?)
        .with_pool_size(parse_env(
            "OLIST_DATABASE_POOL_SIZE",
            get_env("OLIST_DATABASE_POOL_SIZE", "10"),
        )?)
        .with_connect_timeout(parse_env(
            "OLIST_DATABASE_CONNECT_TIMEOUT",
            get_env("OLIST_DATABASE_CONNECT_TIMEOUT", "30"),
        )?);

    if let Ok(url) = std::env::var("OLIST_DATABASE_URL") {
        if !url.trim().is_empty() {
            config = config.with_url(url.trim());
        }
    }

    Ok(config)
}
