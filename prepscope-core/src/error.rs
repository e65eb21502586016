//! Error types for prepscope-core

use thiserror::Error;

/// Main error type for the prepscope-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A record failed boundary validation
    #[error("invalid {field} in record {index}: {message}")]
    Validation {
        index: usize,
        field: &'static str,
        message: String,
    },

    /// Parallel series passed with different lengths
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type alias for prepscope-core
pub type Result<T> = std::result::Result<T, Error>;
