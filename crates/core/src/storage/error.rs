use thiserror::Error;

/// Errors that can occur when talking to the document store.
///
/// `Clone` so a single failed connection attempt can be handed to every
/// caller that was waiting on it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Document not found: {path}")]
    NotFound { path: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
