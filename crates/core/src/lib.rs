//! Core types for the todos document service.
//!
//! Pure data types and traits shared by the server crate: the stored
//! document, its fixed location in the store hierarchy, the write
//! acknowledgment, and the [`storage::DocumentStore`] trait that backends
//! implement.

pub mod document;
pub mod storage;
