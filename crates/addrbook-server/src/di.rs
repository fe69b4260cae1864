//! Composition root.
//!
//! Builds every long-lived component from `AppConfig` exactly once and owns
//! them for the lifetime of the process:
//!
//! ```text
//! AppContainer
//!   ├── DatabasePool            (database.type = mysql)
//!   ├── ContactRepositoryImpl ── MySqlContactDaoImpl | InMemoryContactDaoImpl
//!   ├── PartitionedCache ── CacheRegistry
//!   │        └── NoopCache | InMemoryCache | RedisCache   (cache.type)
//!   └── AddressBookImpl ── ContactCachePartition
//! ```

use addrbook_config::{AppConfig, CacheConfig, PersistenceType};
use addrbook_core::{AddrBookResult, HealthCheck};
use addrbook_repository::{
    create_pool, ContactDao, ContactRepository, ContactRepositoryImpl, DatabaseHealthCheck, DatabasePoolInterface,
    InMemoryContactDaoImpl, MySqlContactDaoImpl,
};
use addrbook_service::{
    create_backend, AddressBook, AddressBookImpl, CacheBackend, CacheHealthCheck, CacheRegistry,
    ContactCachePartition, PartitionedCache,
};
use std::sync::Arc;
use tracing::info;

/// Owns the application's components.
pub struct AppContainer {
    database: Option<Arc<dyn DatabasePoolInterface>>,
    cache: Arc<PartitionedCache>,
    address_book: Arc<dyn AddressBook>,
    health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppContainer {
    /// Connects to the configured stores and wires the application.
    ///
    /// Fails on an unreachable database or Redis server and on a cache
    /// partition that cannot be registered.
    pub async fn build(config: &AppConfig) -> AddrBookResult<Self> {
        let (database, dao): (Option<Arc<dyn DatabasePoolInterface>>, Arc<dyn ContactDao>) =
            match config.database.persistence_type {
                PersistenceType::Mysql => {
                    let pool: Arc<dyn DatabasePoolInterface> = create_pool(&config.database).await?;
                    if config.database.run_migrations {
                        pool.run_migrations().await?;
                    }
                    let dao: Arc<dyn ContactDao> = Arc::new(MySqlContactDaoImpl::new(Arc::clone(&pool)));
                    (Some(pool), dao)
                }
                PersistenceType::Inmem => {
                    info!("Using in-memory contact storage");
                    let dao: Arc<dyn ContactDao> = Arc::new(InMemoryContactDaoImpl::new());
                    (None, dao)
                }
            };

        let repository: Arc<dyn ContactRepository> = Arc::new(ContactRepositoryImpl::new(dao));
        let backend = create_backend(&config.cache).await?;

        let mut container = Self::from_parts(repository, backend, &config.cache)?;
        if let Some(pool) = database {
            container
                .health_checks
                .insert(0, Arc::new(DatabaseHealthCheck::new(Arc::clone(&pool))));
            container.database = Some(pool);
        }

        info!(
            persistence = %config.database.persistence_type,
            cache = container.cache.kind(),
            "Application container ready"
        );
        Ok(container)
    }

    /// Wires the cache and address book around an existing repository and
    /// cache backend.
    pub fn from_parts(
        repository: Arc<dyn ContactRepository>,
        backend: Arc<dyn CacheBackend>,
        cache_config: &CacheConfig,
    ) -> AddrBookResult<Self> {
        let registry = Arc::new(CacheRegistry::new());
        let cache = Arc::new(PartitionedCache::new(
            Arc::clone(&backend),
            registry,
            cache_config.operation_timeout(),
        ));
        let contacts = ContactCachePartition::register(Arc::clone(&cache), cache_config.ttl())?;

        let address_book: Arc<dyn AddressBook> = Arc::new(AddressBookImpl::new(repository, contacts));
        let health_checks: Vec<Arc<dyn HealthCheck>> = vec![Arc::new(CacheHealthCheck::new(backend))];

        Ok(Self {
            database: None,
            cache,
            address_book,
            health_checks,
        })
    }

    #[must_use]
    pub fn address_book(&self) -> Arc<dyn AddressBook> {
        Arc::clone(&self.address_book)
    }

    #[must_use]
    pub fn health_checks(&self) -> Vec<Arc<dyn HealthCheck>> {
        self.health_checks.clone()
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<PartitionedCache> {
        &self.cache
    }

    /// Drains pending cache work, then closes the cache and database.
    pub async fn close(&self) {
        info!("Cleaning up resources");
        self.cache.close().await;
        if let Some(database) = &self.database {
            database.close().await;
        }
        info!("Resources have been cleaned up");
    }
}
