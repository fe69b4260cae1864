//! Partition-aware cache front end.
//!
//! Serializes values as MessagePack, resolves the partition TTL and talks to
//! the backend.
//! Failures never reach the caller: a failed read is a miss and a failed
//! write or delete is logged and dropped. Only wiring mistakes (an unregistered
//! namespace) are returned as errors.

use super::{CacheBackend, CacheKey, CacheRegistry};
use addrbook_core::{AddrBookResult, InvariantViolation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, error, warn, Instrument, Span};

/// Counts detached operations that have not finished yet.
#[derive(Debug, Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

/// Decrements the in-flight counter when the task ends, however it ends.
struct InFlightGuard(Arc<InFlight>);

impl InFlightGuard {
    fn acquire(tracker: &Arc<InFlight>) -> Self {
        tracker.count.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(tracker))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Cache front end shared by every partition.
pub struct PartitionedCache {
    backend: Arc<dyn CacheBackend>,
    registry: Arc<CacheRegistry>,
    operation_timeout: Duration,
    in_flight: Arc<InFlight>,
    closed: AtomicBool,
}

impl PartitionedCache {
    #[must_use]
    pub fn new(
        backend: Arc<dyn CacheBackend>,
        registry: Arc<CacheRegistry>,
        operation_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            registry,
            operation_timeout,
            in_flight: Arc::new(InFlight::default()),
            closed: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<CacheRegistry> {
        &self.registry
    }

    /// Backend kind (`none`, `inmem`, `redis`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.backend.kind()
    }

    /// Number of writes and deletes still running in the background.
    #[must_use]
    pub fn pending_operations(&self) -> usize {
        self.in_flight.count.load(Ordering::SeqCst)
    }

    /// Schedules a write of `value` under `key` and returns immediately.
    ///
    /// The write runs detached from the caller, bounded by the operation
    /// timeout, using the TTL of the key's partition.
    pub fn set<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<(), InvariantViolation> {
        let partition = self.registry.must_get_partition(key.namespace())?;

        if self.closed.load(Ordering::SeqCst) {
            debug!(key = %key, "Cache closed; skipping write");
            return Ok(());
        }

        let bytes = match rmp_serde::to_vec_named(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to serialize cache value");
                return Ok(());
            }
        };

        let backend = Arc::clone(&self.backend);
        let ttl = partition.ttl();
        self.spawn_detached("write", key.storage_key(), move |storage_key| async move {
            backend.set_raw(&storage_key, bytes, ttl).await
        });

        Ok(())
    }

    /// Reads `key`. Any backend or decoding failure is reported as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>, InvariantViolation> {
        self.registry.must_get_partition(key.namespace())?;

        let storage_key = key.storage_key();
        let bytes = match tokio::time::timeout(self.operation_timeout, self.backend.get_raw(&storage_key)).await {
            Ok(Ok(Some(bytes))) => bytes,
            Ok(Ok(None)) => {
                debug!(key = %storage_key, "Cache miss");
                return Ok(None);
            }
            Ok(Err(e)) => {
                warn!(key = %storage_key, error = %e, "Cache read failed");
                return Ok(None);
            }
            Err(_) => {
                warn!(key = %storage_key, "Cache read timed out");
                return Ok(None);
            }
        };

        match rmp_serde::from_slice(&bytes) {
            Ok(value) => {
                debug!(key = %storage_key, "Cache hit");
                Ok(Some(value))
            }
            Err(e) => {
                error!(key = %storage_key, error = %e, "Failed to deserialize cached value");
                Ok(None)
            }
        }
    }

    /// Schedules removal of `key` and returns immediately.
    pub fn del(&self, key: &CacheKey) -> Result<(), InvariantViolation> {
        self.registry.must_get_partition(key.namespace())?;

        if self.closed.load(Ordering::SeqCst) {
            debug!(key = %key, "Cache closed; skipping delete");
            return Ok(());
        }

        let backend = Arc::clone(&self.backend);
        self.spawn_detached("delete", key.storage_key(), move |storage_key| async move {
            backend.delete_raw(&storage_key).await.map(|existed| {
                debug!(key = %storage_key, existed, "Cache entry invalidated");
            })
        });

        Ok(())
    }

    /// Runs a backend operation on its own task, bounded by the operation
    /// timeout and tracked until it ends. The caller's span is carried over
    /// for diagnostics only.
    fn spawn_detached<F, Fut>(&self, operation: &'static str, storage_key: String, op: F)
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = AddrBookResult<()>> + Send + 'static,
    {
        let timeout = self.operation_timeout;
        let guard = InFlightGuard::acquire(&self.in_flight);

        tokio::spawn(
            async move {
                let _guard = guard;
                let key = storage_key.clone();
                match tokio::time::timeout(timeout, op(storage_key)).await {
                    Ok(Ok(())) => debug!(key = %key, operation, "Cache {} complete", operation),
                    Ok(Err(e)) => warn!(key = %key, error = %e, "Cache {} failed", operation),
                    Err(_) => warn!(
                        key = %key,
                        timeout_ms = timeout.as_millis() as u64,
                        "Cache {} timed out",
                        operation
                    ),
                }
            }
            .instrument(Span::current()),
        );
    }

    /// Resolves once no background operations are running.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.in_flight.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.in_flight.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Stops accepting writes, drains pending ones and closes the backend.
    ///
    /// Draining is bounded by the operation timeout. Calling this more than
    /// once is a no-op.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        if tokio::time::timeout(self.operation_timeout, self.wait_idle()).await.is_err() {
            warn!(pending = self.pending_operations(), "Closing cache with operations still pending");
        }

        self.backend.close().await;
        debug!(kind = self.kind(), "Cache closed");
    }
}

impl std::fmt::Debug for PartitionedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionedCache")
            .field("backend", &self.backend.kind())
            .field("registry", &self.registry)
            .field("operation_timeout", &self.operation_timeout)
            .field("pending_operations", &self.pending_operations())
            .finish()
    }
}
