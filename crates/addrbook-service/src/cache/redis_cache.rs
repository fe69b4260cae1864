//! Redis-based cache implementation.

use super::CacheBackend;
use addrbook_config::RedisConfig;
use addrbook_core::{AddrBookError, AddrBookResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use std::time::Duration;
use tracing::{debug, info};

/// Networked cache shared by every instance of the service.
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Builds a connection pool and verifies the server answers `PING`.
    pub async fn connect(config: &RedisConfig) -> AddrBookResult<Self> {
        let mut pool_config = Config::from_url(&config.url);
        pool_config.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size));

        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| AddrBookError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

        let cache = Self::with_pool(pool);
        cache.ping().await?;

        info!(pool_size = config.pool_size, "Connected to Redis cache");
        Ok(cache)
    }

    /// Wraps an existing pool without probing it.
    #[must_use]
    pub fn with_pool(pool: Pool) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> AddrBookResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| AddrBookError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    fn kind(&self) -> &'static str {
        "redis"
    }

    async fn get_raw(&self, key: &str) -> AddrBookResult<Option<Vec<u8>>> {
        let mut conn = self.get_conn().await?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| AddrBookError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> AddrBookResult<()> {
        let mut conn = self.get_conn().await?;

        match expiry_millis(ttl) {
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(|e| AddrBookError::Cache(format!("Failed to set key '{}': {}", key, e)))?;
                debug!("Cached key '{}' without expiry", key);
            }
            Some(ttl_ms) => {
                conn.pset_ex::<_, _, ()>(key, value, ttl_ms)
                    .await
                    .map_err(|e| AddrBookError::Cache(format!("Failed to set key '{}': {}", key, e)))?;
                debug!("Cached key '{}' with TTL {}ms", key, ttl_ms);
            }
        }

        Ok(())
    }

    async fn delete_raw(&self, key: &str) -> AddrBookResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| AddrBookError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> AddrBookResult<()> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| AddrBookError::Cache(format!("Redis PING failed: {}", e)))?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close();
        debug!("Closed Redis connection pool");
    }
}

/// `PSETEX` expiry for `ttl`; `None` stores the key without expiry.
///
/// Sub-millisecond remainders round up so a non-zero TTL never becomes zero.
fn expiry_millis(ttl: Duration) -> Option<u64> {
    if ttl.is_zero() {
        return None;
    }
    let millis = ttl.as_nanos().div_ceil(1_000_000);
    Some(u64::try_from(millis).unwrap_or(u64::MAX))
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCache")
            .field("max_size", &status.max_size)
            .field("size", &status.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_keeps_millisecond_precision() {
        assert_eq!(expiry_millis(Duration::ZERO), None);
        assert_eq!(expiry_millis(Duration::from_millis(1900)), Some(1900));
        assert_eq!(expiry_millis(Duration::from_secs(300)), Some(300_000));
        assert_eq!(expiry_millis(Duration::from_micros(1)), Some(1));
        assert_eq!(expiry_millis(Duration::from_micros(2500)), Some(3));
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_server_fails() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1/0".to_string(),
            pool_size: 1,
        };

        let err = RedisCache::connect(&config).await.unwrap_err();
        assert!(matches!(err, AddrBookError::Cache(_)));
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_configuration_error() {
        let config = RedisConfig {
            url: "not a url".to_string(),
            pool_size: 1,
        };

        let err = RedisCache::connect(&config).await.unwrap_err();
        assert!(matches!(err, AddrBookError::Configuration(_)));
    }
}
