//! Error types for the farmer search engine

use thiserror::Error;

/// Main error type for the farmer search engine
///
/// Parsing, normalization and in-memory matching are infallible; these
/// variants only come from I/O boundaries.
#[derive(Error, Debug)]
pub enum FarmerSearchError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Evaluation task failed: {0}")]
    TaskFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FarmerSearchError {
    fn from(err: serde_json::Error) -> Self {
        FarmerSearchError::DeserializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for FarmerSearchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FarmerSearchError::TaskFailed(err.to_string())
    }
}

/// Result type alias for the farmer search engine
pub type Result<T> = std::result::Result<T, FarmerSearchError>;
