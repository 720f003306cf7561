//! Error types for the Cytewise library.
//!
//! Formatting itself never fails. These errors only arise at the edges:
//! naming a style or field, and loading records from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Cytewise operations.
#[derive(Debug, Error)]
pub enum CytewiseError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Style name that matches none of the known citation styles.
    #[error("Unknown citation style: {0}")]
    UnknownStyle(String),

    /// Field name that matches none of the record fields.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A `key=value` assignment that could not be split.
    #[error("Invalid field assignment '{0}', expected key=value")]
    InvalidAssignment(String),
}

/// Result type alias for Cytewise operations.
pub type Result<T> = std::result::Result<T, CytewiseError>;
