use serde::{Deserialize, Serialize};

/// Acknowledgment returned by the store after an upsert.
///
/// Opaque to callers beyond signalling success; `cas` changes on every
/// write to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    pub cas: u64,
    pub token: MutationToken,
}

/// Identifies a single mutation within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationToken {
    pub bucket_name: String,
    pub sequence_number: u64,
}

impl WriteResult {
    pub fn new(bucket_name: impl Into<String>, sequence_number: u64) -> Self {
        Self {
            cas: sequence_number,
            token: MutationToken {
                bucket_name: bucket_name.into(),
                sequence_number,
            },
        }
    }
}
