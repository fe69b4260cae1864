//! Byte-level cache backend abstraction.

use addrbook_core::{AddrBookResult, HealthCheck, HealthStatus, Interface};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Key-value store holding opaque serialized values.
///
/// Implementations know nothing about entities or partitions: keys arrive
/// fully qualified and values arrive already encoded. Errors are reported to
/// the caller, which decides how to degrade.
#[async_trait]
pub trait CacheBackend: Interface + Send + Sync {
    /// Short name used in logs (`none`, `inmem`, `redis`).
    fn kind(&self) -> &'static str;

    /// Returns the stored bytes, or `None` if the key is absent or expired.
    async fn get_raw(&self, key: &str) -> AddrBookResult<Option<Vec<u8>>>;

    /// Stores bytes under `key`. A zero `ttl` stores without expiry.
    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> AddrBookResult<()>;

    /// Removes `key`. Returns `true` if it existed.
    async fn delete_raw(&self, key: &str) -> AddrBookResult<bool>;

    /// Verifies the backend is reachable.
    async fn ping(&self) -> AddrBookResult<()> {
        Ok(())
    }

    /// Releases backend resources.
    async fn close(&self);
}

/// Readiness probe for the cache backend.
///
/// An unreachable cache degrades the service rather than breaking it, so a
/// failed ping reports `Degraded`.
pub struct CacheHealthCheck {
    backend: Arc<dyn CacheBackend>,
}

impl CacheHealthCheck {
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl HealthCheck for CacheHealthCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthStatus {
        match self.backend.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Degraded(format!("{} cache unavailable: {}", self.backend.kind(), e)),
        }
    }
}
