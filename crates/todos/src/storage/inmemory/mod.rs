//! In-memory storage backend.
//!
//! Keeps documents in a `HashMap` behind `Arc<RwLock<_>>`. Nothing is
//! persisted; data is lost when the store is dropped.

mod store;

pub use store::InMemoryStore;
