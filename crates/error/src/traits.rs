//! # Error Traits
//!
//! Extension methods for results whose error converts into [`AppError`].

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    /// Converts the error and prefixes its message with `context`.
    fn context<C: ToString>(self, context: C) -> Result<T>;

    /// Converts the error and logs it at error level with its code.
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn context<C: ToString>(self, context: C) -> Result<T> { self.map_err(|e| e.into().context(context)) }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(error = %err, code = err.code(), "Error occurred");
            err
        })
    }
}
