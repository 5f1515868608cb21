//! Error types for the Tarnish library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tarnish operations.
#[derive(Debug, Error)]
pub enum TarnishError {
    /// The raw source file does not exist at the expected location.
    #[error("Missing raw source file at '{path}'. Copy it from your dataset export first.")]
    MissingSource { path: PathBuf },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tarnish operations.
pub type Result<T> = std::result::Result<T, TarnishError>;
