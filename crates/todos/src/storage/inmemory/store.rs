use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::document::{Document, DocumentPath, WriteResult};
use todos_core::storage::{DocumentStore, Result, StoreError};

#[derive(Debug, Clone)]
struct StoredDocument {
    document: Document,
    sequence: u64,
}

/// In-memory document store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<RwLock<HashMap<DocumentPath, StoredDocument>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of every stored document.
    #[cfg(test)]
    pub async fn paths(&self) -> Vec<DocumentPath> {
        self.documents.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, path: &DocumentPath) -> Result<Document> {
        let documents = self.documents.read().await;
        documents
            .get(path)
            .map(|stored| stored.document.clone())
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })
    }

    async fn upsert(&self, path: &DocumentPath, document: Document) -> Result<WriteResult> {
        let mut documents = self.documents.write().await;
        let sequence = documents.get(path).map_or(0, |stored| stored.sequence) + 1;
        documents.insert(path.clone(), StoredDocument { document, sequence });

        Ok(WriteResult::new(&path.bucket, sequence))
    }
}
