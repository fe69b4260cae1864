//! Backend used when caching is disabled.

use super::CacheBackend;
use addrbook_core::AddrBookResult;
use async_trait::async_trait;
use std::time::Duration;

/// Always misses; writes and deletes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

impl NoopCache {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheBackend for NoopCache {
    fn kind(&self) -> &'static str {
        "none"
    }

    async fn get_raw(&self, _key: &str) -> AddrBookResult<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn set_raw(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> AddrBookResult<()> {
        Ok(())
    }

    async fn delete_raw(&self, _key: &str) -> AddrBookResult<bool> {
        Ok(false)
    }

    async fn close(&self) {}
}
