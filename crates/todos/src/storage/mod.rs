//! Storage backend implementations.
//!
//! Concrete implementations of [`DocumentStore`] from `todos_core::storage`,
//! selected at startup with `--backend`:
//!
//! - `redis` (default): Redis via a tokio `ConnectionManager`
//! - `memory`: process-local map, for development and tests

pub mod inmemory;
pub mod redis_impl;

use std::sync::Arc;

use clap::ValueEnum;

use todos_core::storage::{DocumentStore, StoreError};

use crate::{config::Config, connection::ConnectionProvider};

pub use inmemory::InMemoryStore;
pub use redis_impl::RedisStore;

/// Connection provider handing out the active store.
pub type StoreProvider = ConnectionProvider<Arc<dyn DocumentStore>>;

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Redis,
    Memory,
}

/// Builds a lazily connecting provider for `backend`.
pub fn provider(backend: Backend, config: &Config) -> StoreProvider {
    match backend {
        Backend::Redis => {
            let config = config.clone();
            ConnectionProvider::new(move || {
                let config = config.clone();
                async move {
                    let store = RedisStore::connect(&config).await?;
                    Ok::<_, StoreError>(Arc::new(store) as Arc<dyn DocumentStore>)
                }
            })
        }
        Backend::Memory => {
            let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());
            ConnectionProvider::new(move || {
                let store = store.clone();
                async move { Ok::<_, StoreError>(store) }
            })
        }
    }
}
