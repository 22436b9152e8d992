//! # Olist Schema Error Infrastructure
//!
//! Error types shared by the migration, seed and CLI crates.
//!
//! Failures surfaced by the relational store are classified into the three
//! constraint kinds the schema relies on (primary key / unique, foreign key,
//! NOT NULL). Everything else is reported as a generic database error.

pub mod classify;
pub mod seed;
pub mod traits;

pub use classify::ConstraintKind;
pub use seed::SeedResult;
pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("UniqueViolation: {message}")]
    UniqueViolation {
        message: String,
    },

    #[error("ForeignKeyViolation: {message}")]
    ForeignKeyViolation {
        message: String,
    },

    #[error("NotNullViolation: {message}")]
    NotNullViolation {
        message: String,
    },

    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },

    #[error("Csv: {message}")]
    Csv {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Create a constraint violation error of the given kind.
    pub fn constraint(kind: ConstraintKind, message: impl ToString) -> Self {
        let message = message.to_string();
        match kind {
            ConstraintKind::Unique => {
                Self::UniqueViolation {
                    message,
                }
            },
            ConstraintKind::ForeignKey => {
                Self::ForeignKeyViolation {
                    message,
                }
            },
            ConstraintKind::NotNull => {
                Self::NotNullViolation {
                    message,
                }
            },
        }
    }

    /// The constraint kind, if this error is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            AppError::UniqueViolation {
                ..
            } => Some(ConstraintKind::Unique),
            AppError::ForeignKeyViolation {
                ..
            } => Some(ConstraintKind::ForeignKey),
            AppError::NotNullViolation {
                ..
            } => Some(ConstraintKind::NotNull),
            _ => None,
        }
    }

    /// Returns true for primary-key/unique, foreign-key and NOT NULL violations.
    pub fn is_constraint_violation(&self) -> bool { self.constraint_kind().is_some() }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UniqueViolation {
                ..
            } => "UNIQUE_VIOLATION",
            AppError::ForeignKeyViolation {
                ..
            } => "FOREIGN_KEY_VIOLATION",
            AppError::NotNullViolation {
                ..
            } => "NOT_NULL_VIOLATION",
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Migration {
                ..
            } => "MIGRATION_ERROR",
            AppError::Csv {
                ..
            } => "CSV_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::UniqueViolation {
                message,
            }
            | AppError::ForeignKeyViolation {
                message,
            }
            | AppError::NotNullViolation {
                message,
            }
            | AppError::NotFound {
                message,
            }
            | AppError::Validation {
                message,
            }
            | AppError::Internal {
                message,
            }
            | AppError::Database {
                message,
            }
            | AppError::Io {
                message,
            }
            | AppError::Config {
                message,
            }
            | AppError::Migration {
                message,
            }
            | AppError::Csv {
                message,
            } => message,
        }
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let prefix = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::UniqueViolation {
                message,
            } => {
                Self::UniqueViolation {
                    message: prefix(message),
                }
            },
            AppError::ForeignKeyViolation {
                message,
            } => {
                Self::ForeignKeyViolation {
                    message: prefix(message),
                }
            },
            AppError::NotNullViolation {
                message,
            } => {
                Self::NotNullViolation {
                    message: prefix(message),
                }
            },
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: prefix(message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: prefix(message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: prefix(message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: prefix(message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: prefix(message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: prefix(message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: prefix(message),
                }
            },
            AppError::Csv {
                message,
            } => {
                Self::Csv {
                    message: prefix(message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert CSV reader errors to AppError.
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_err) = err.kind() {
            return Self::Io {
                message: io_err.to_string(),
            };
        }
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
///
/// Constraint failures become the matching violation variant; migration
/// failures keep their own variant.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some((kind, message)) = classify::classify_db_err(&err) {
            return Self::constraint(kind, message);
        }
        match err {
            sea_orm::DbErr::Migration(message) => {
                Self::Migration {
                    message,
                }
            },
            other => {
                Self::Database {
                    message: other.to_string(),
                }
            },
        }
    }
}
