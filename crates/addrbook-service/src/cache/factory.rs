//! Backend selection from configuration.

use super::{CacheBackend, InMemoryCache, NoopCache, RedisCache};
use addrbook_config::{CacheConfig, CacheType};
use addrbook_core::AddrBookResult;
use std::sync::Arc;
use tracing::info;

/// Builds the backend named by `config.cache_type`.
///
/// The Redis backend is probed on creation; an unreachable server fails
/// startup.
pub async fn create_backend(config: &CacheConfig) -> AddrBookResult<Arc<dyn CacheBackend>> {
    let backend: Arc<dyn CacheBackend> = match config.cache_type {
        CacheType::Disabled => Arc::new(NoopCache::new()),
        CacheType::InMemory => Arc::new(InMemoryCache::new(config.inmem.max_capacity)),
        CacheType::Redis => Arc::new(RedisCache::connect(&config.redis).await?),
    };

    info!(
        cache_type = %config.cache_type,
        ttl_secs = config.ttl_secs,
        "Cache backend ready"
    );
    Ok(backend)
}
