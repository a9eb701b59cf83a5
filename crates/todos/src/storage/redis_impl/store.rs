use std::{future::Future, time::Duration};

use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, RedisResult,
};

use todos_core::document::{Document, DocumentPath, WriteResult};
use todos_core::storage::{DocumentStore, Result, StoreError};

use super::error::{map_connection_error, map_redis_error};
use crate::config::Config;

const VALUE_FIELD: &str = "value";
const SEQUENCE_FIELD: &str = "seq";

/// Redis document store.
///
/// The connection manager is cloned per operation; clones share one
/// multiplexed connection. Its built-in connect retries are disabled: a
/// failed connect surfaces at once and only `ConnectionProvider` may start
/// another attempt.
pub struct RedisStore {
    conn: ConnectionManager,
    kv_timeout: Duration,
}

impl RedisStore {
    /// Connects using the endpoint and credentials from `config`.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = connection_url(&config.endpoint, &config.username, &config.password);
        let store = Self::open(&url, config.connect_timeout, config.kv_timeout).await?;

        tracing::info!(
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            "Connected to Redis"
        );
        Ok(store)
    }

    /// Connects to a Redis URL.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionFailed` if the URL is invalid or the
    /// server cannot be reached, and `StoreError::Timeout` if connecting
    /// takes longer than `connect_timeout`.
    pub async fn open(url: &str, connect_timeout: Duration, kv_timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_connection_error)?;
        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(0)
            .set_connection_timeout(connect_timeout);
        let connect = ConnectionManager::new_with_config(client, manager_config);
        let conn = tokio::time::timeout(connect_timeout, connect)
            .await
            .map_err(|_| StoreError::Timeout {
                operation: "connect",
                timeout_ms: millis(connect_timeout),
            })?
            .map_err(map_redis_error)?;

        Ok(Self { conn, kv_timeout })
    }

    async fn with_timeout<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.kv_timeout, fut).await {
            Ok(result) => result.map_err(map_redis_error),
            Err(_) => Err(StoreError::Timeout {
                operation,
                timeout_ms: millis(self.kv_timeout),
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn get(&self, path: &DocumentPath) -> Result<Document> {
        let key = path.flat_key();
        let mut conn = self.conn.clone();

        let value: Option<Vec<u8>> = self
            .with_timeout("get", conn.hget(&key, VALUE_FIELD))
            .await?;

        value.map(Document::from).ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })
    }

    async fn upsert(&self, path: &DocumentPath, document: Document) -> Result<WriteResult> {
        let key = path.flat_key();
        let mut conn = self.conn.clone();

        let mut pipe = redis::pipe();
        pipe.atomic()
            .hset(&key, VALUE_FIELD, document.as_bytes())
            .ignore()
            .hincr(&key, SEQUENCE_FIELD, 1u64);

        let (sequence,): (u64,) = self
            .with_timeout("upsert", pipe.query_async(&mut conn))
            .await?;

        Ok(WriteResult::new(&path.bucket, sequence))
    }
}

/// Builds a `redis://` URL with percent-encoded credentials.
///
/// `endpoint` is a host, `host:port`, or a URL with its own scheme
/// (`rediss://` needs a TLS-enabled build of the `redis` crate).
pub fn connection_url(endpoint: &str, username: &str, password: &str) -> String {
    let (scheme, host) = endpoint.split_once("://").unwrap_or(("redis", endpoint));
    format!(
        "{scheme}://{}:{}@{}",
        urlencoding::encode(username),
        urlencoding::encode(password),
        host.trim_end_matches('/')
    )
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
