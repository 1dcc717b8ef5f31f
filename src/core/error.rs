//! Error types for record loading.
//!
//! Loading is the only fallible step. Once records are in memory every
//! derivation degrades gracefully instead of failing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `LoadError`.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading the record source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),
}
