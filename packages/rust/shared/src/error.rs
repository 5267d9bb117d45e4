//! Error types for Routedoc.
//!
//! Library crates use [`RoutedocError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Per-route extraction failures are recovered inside the extraction driver
//! and never surface through this type; only configuration, serialization,
//! and staging I/O failures abort a run.

use std::path::PathBuf;

/// Top-level error type for all Routedoc operations.
#[derive(Debug, thiserror::Error)]
pub enum RoutedocError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A single route's extractor invocation failed.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Filesystem I/O error (staging directory, group files, output docs).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (malformed staged file, schema mismatch, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Writing final documents failed.
    #[error("writer error: {0}")]
    Writer(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RoutedocError>;

impl RoutedocError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an extraction error from any displayable message.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
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
