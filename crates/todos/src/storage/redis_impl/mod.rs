//! Redis storage backend.
//!
//! The document lives in a single Redis hash named after the flattened
//! document path: field `value` holds the raw bytes and field `seq` counts
//! writes. Both fields are updated in one MULTI/EXEC transaction.

mod error;
mod store;

pub use store::RedisStore;
