use async_trait::async_trait;

use crate::document::{Document, DocumentPath, WriteResult};

use super::Result;

/// Key-value access to stored documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches the document at `path`.
    ///
    /// A missing document is an error ([`super::StoreError::NotFound`]),
    /// not `None`.
    async fn get(&self, path: &DocumentPath) -> Result<Document>;

    /// Inserts or replaces the document at `path`.
    async fn upsert(&self, path: &DocumentPath, document: Document) -> Result<WriteResult>;
}
