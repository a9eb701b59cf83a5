use thiserror::Error;

/// Errors raised when a request body is checked before being stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document is not valid JSON: {0}")]
    MalformedJson(String),
}
