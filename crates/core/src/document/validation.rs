//! Well-formedness check for incoming documents.

use serde::de::IgnoredAny;

use super::DocumentError;

/// Checks that `bytes` hold exactly one JSON value.
///
/// The value is not inspected beyond parsing; any JSON type is accepted.
pub fn validate_json(bytes: &[u8]) -> Result<(), DocumentError> {
    serde_json::from_slice::<IgnoredAny>(bytes)
        .map(|_| ())
        .map_err(|e| DocumentError::MalformedJson(e.to_string()))
}
