//! Error types for claimsift.
//!
//! Library crates use [`ClaimsiftError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all claimsift operations.
#[derive(Debug, thiserror::Error)]
pub enum ClaimsiftError {
    /// Configuration loading or validation error (app config, keyword list).
    #[error("config error: {message}")]
    Config { message: String },

    /// A column the pipeline needs is absent from the input table.
    #[error("schema error: missing column {column:?}")]
    Schema { column: String },

    /// Table shape violation (row width, column length mismatch).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV parse or write error.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ClaimsiftError>;

impl ClaimsiftError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a schema error for a missing column.
    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
