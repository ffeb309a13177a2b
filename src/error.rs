//! Error types for pandoc-quotenote

use thiserror::Error;

/// Failures at the document boundary. The filter rules themselves have
/// no error paths beyond a malformed node payload.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("input is not a pandoc document")]
    NotADocument,

    #[error("unsupported pandoc-api-version: {0}")]
    UnsupportedApiVersion(String),

    #[error("malformed {0} node")]
    MalformedNode(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using FilterError
pub type Result<T> = std::result::Result<T, FilterError>;
