//! Read-through cache infrastructure.
//!
//! ```text
//! ContactCachePartition ──> PartitionedCache ──> CacheBackend
//!                               │                  ├── NoopCache
//!                               └── CacheRegistry  ├── InMemoryCache
//!                                                  └── RedisCache
//! ```

mod backend;
mod cache_key;
mod contact_partition;
mod factory;
mod memory_cache;
mod noop_cache;
mod partitioned_cache;
mod redis_cache;
mod registry;

pub use backend::{CacheBackend, CacheHealthCheck};
pub use cache_key::CacheKey;
pub use contact_partition::{ContactCachePartition, CONTACT_BY_ID_NAMESPACE};
pub use factory::create_backend;
pub use memory_cache::InMemoryCache;
pub use noop_cache::NoopCache;
pub use partitioned_cache::PartitionedCache;
pub use redis_cache::RedisCache;
pub use registry::{CachePartition, CacheRegistry};
