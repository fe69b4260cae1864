//! In-memory cache implementation using moka.

use super::CacheBackend;
use addrbook_core::AddrBookResult;
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache entry stored in moka.
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Arc<[u8]>,
    /// Zero means no expiry.
    ttl: Duration,
}

/// Expires each entry after its own TTL, restarting on overwrite.
struct EntryTtl;

impl Expiry<String, CacheEntry> for EntryTtl {
    fn expire_after_create(&self, _key: &String, value: &CacheEntry, _created_at: Instant) -> Option<Duration> {
        (!value.ttl.is_zero()).then_some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        (!value.ttl.is_zero()).then_some(value.ttl)
    }
}

/// Process-local cache bounded by entry count.
///
/// Entries are evicted when their TTL elapses or when capacity is exceeded.
pub struct InMemoryCache {
    cache: MokaCache<String, CacheEntry>,
}

impl InMemoryCache {
    /// Creates a cache holding at most `max_capacity` entries.
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryTtl)
            .build();

        Self { cache }
    }

    /// Approximate number of live entries.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl CacheBackend for InMemoryCache {
    fn kind(&self) -> &'static str {
        "inmem"
    }

    async fn get_raw(&self, key: &str) -> AddrBookResult<Option<Vec<u8>>> {
        let value = self.cache.get(key).await.map(|entry| entry.data.to_vec());

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> AddrBookResult<()> {
        let entry = CacheEntry {
            data: value.into(),
            ttl,
        };
        self.cache.insert(key.to_string(), entry).await;

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete_raw(&self, key: &str) -> AddrBookResult<bool> {
        let existed = self.cache.remove(key).await.is_some();
        debug!("Deleted key '{}': {}", key, existed);
        Ok(existed)
    }

    async fn close(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

impl std::fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = InMemoryCache::new(100);
        let ttl = Duration::from_secs(60);

        cache.set_raw("k", b"v1".to_vec(), ttl).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), Some(b"v1".to_vec()));

        cache.set_raw("k", b"v2".to_vec(), ttl).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), Some(b"v2".to_vec()));

        assert!(cache.delete_raw("k").await.unwrap());
        assert!(!cache.delete_raw("k").await.unwrap());
        assert!(cache.get_raw("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entries_expire_after_their_own_ttl() {
        let cache = InMemoryCache::new(100);

        cache
            .set_raw("short", b"x".to_vec(), Duration::from_millis(50))
            .await
            .unwrap();
        cache
            .set_raw("long", b"y".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(cache.get_raw("short").await.unwrap().is_none());
        assert!(cache.get_raw("long").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_zero_ttl_never_expires() {
        let cache = InMemoryCache::new(100);
        cache.set_raw("k", b"x".to_vec(), Duration::ZERO).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get_raw("k").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_close_drops_entries() {
        let cache = InMemoryCache::new(100);
        cache
            .set_raw("k", b"x".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.entry_count().await, 1);

        cache.close().await;

        assert_eq!(cache.entry_count().await, 0);
    }
}
