//! Lazily established, process-wide store connection.
//!
//! The first caller starts the connect future and parks it in a slot; every
//! caller, including concurrent ones, awaits a clone of that same future. A
//! successful connection is then reused for the life of the process. A
//! failed attempt is delivered to everyone waiting on it and is replaced by a
//! fresh attempt on the next call.

use std::{future::Future, sync::Arc, sync::Mutex};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use todos_core::storage::{Result, StoreError};

type Connect<C> = Arc<dyn Fn() -> BoxFuture<'static, Result<C>> + Send + Sync>;
type PendingConnection<C> = Shared<BoxFuture<'static, Result<C>>>;

/// Single-initialization cell around a connect function.
pub struct ConnectionProvider<C>
where
    C: Clone + Send + Sync + 'static,
{
    connect: Connect<C>,
    slot: Mutex<Option<PendingConnection<C>>>,
}

impl<C> ConnectionProvider<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Creates an empty provider. Nothing is connected until [`Self::get`].
    pub fn new<F, Fut>(connect: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<C>> + Send + 'static,
    {
        Self {
            connect: Arc::new(move || connect().boxed()),
            slot: Mutex::new(None),
        }
    }

    /// Returns the shared connection, establishing it if needed.
    pub async fn get(&self) -> Result<C> {
        let pending = {
            let mut slot = self
                .slot
                .lock()
                .map_err(|_| StoreError::ConnectionFailed("connection slot poisoned".into()))?;

            match slot.as_ref() {
                Some(pending) if !matches!(pending.peek(), Some(Err(_))) => pending.clone(),
                _ => {
                    let pending = self.start_attempt(slot.is_some());
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    /// Whether a successful connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.slot
            .lock()
            .ok()
            .and_then(|slot| {
                slot.as_ref()
                    .and_then(|pending| pending.peek().map(|result| result.is_ok()))
            })
            .unwrap_or(false)
    }

    fn start_attempt(&self, retry: bool) -> PendingConnection<C> {
        tracing::info!(retry, "Establishing store connection");

        let connect = (self.connect)();
        async move {
            let result = connect.await;
            match &result {
                Ok(_) => tracing::info!("Store connection established"),
                Err(e) => tracing::error!(error = %e, "Store connection failed"),
            }
            result
        }
        .boxed()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use futures_util::future::join_all;

    fn counting_provider(
        fail_first: usize,
    ) -> (ConnectionProvider<usize>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let provider = ConnectionProvider::new(move || {
            let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                if call <= fail_first {
                    Err(StoreError::ConnectionFailed(format!("attempt {call} refused")))
                } else {
                    Ok(call)
                }
            }
        });

        (provider, calls)
    }

    #[tokio::test]
    async fn test_nothing_connects_until_first_get() {
        let (provider, calls) = counting_provider(0);

        assert!(!provider.is_connected());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(provider.get().await, Ok(1));
        assert!(provider.is_connected());
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_connect() {
        let (provider, calls) = counting_provider(0);

        let results = join_all((0..8).map(|_| provider.get())).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| *r == Ok(1)));
    }

    #[tokio::test]
    async fn test_connection_is_reused() {
        let (provider, calls) = counting_provider(0);

        provider.get().await.unwrap();
        provider.get().await.unwrap();
        provider.get().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_waiters_observe_the_same_failure() {
        let (provider, calls) = counting_provider(1);

        let results = join_all((0..4).map(|_| provider.get())).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for result in results {
            assert_eq!(
                result,
                Err(StoreError::ConnectionFailed("attempt 1 refused".to_string()))
            );
        }
        assert!(!provider.is_connected());
    }

    #[tokio::test]
    async fn test_failed_attempt_is_retried_on_next_call() {
        let (provider, calls) = counting_provider(1);

        assert!(provider.get().await.is_err());
        assert_eq!(provider.get().await, Ok(2));
        assert_eq!(provider.get().await, Ok(2));

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(provider.is_connected());
    }
}
