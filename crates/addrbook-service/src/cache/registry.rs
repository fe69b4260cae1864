//! Cache partition registry.
//!
//! A partition binds a namespace to a TTL. Every namespace must be registered
//! before any key in it is written, and may be registered only once.

use addrbook_core::InvariantViolation;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// A named region of the cache with its own TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePartition {
    namespace: String,
    ttl: Duration,
}

impl CachePartition {
    /// A zero TTL means entries never expire.
    #[must_use]
    pub fn new(namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            namespace: namespace.into(),
            ttl,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Namespace → partition map owned by the composition root.
///
/// Registration happens during startup; afterwards the registry is only read.
#[derive(Debug, Default)]
pub struct CacheRegistry {
    partitions: RwLock<HashMap<String, CachePartition>>,
}

impl CacheRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a partition.
    ///
    /// Fails on an empty namespace or on a namespace that is already taken;
    /// both mean the application was wired incorrectly.
    pub fn register(&self, partition: CachePartition) -> Result<(), InvariantViolation> {
        if partition.namespace.is_empty() {
            return Err(InvariantViolation::EmptyNamespace);
        }

        let mut partitions = self.partitions.write();
        if partitions.contains_key(&partition.namespace) {
            return Err(InvariantViolation::DuplicatePartition(partition.namespace));
        }

        info!(
            namespace = %partition.namespace,
            ttl_secs = partition.ttl.as_secs(),
            "Registered cache partition"
        );
        partitions.insert(partition.namespace.clone(), partition);
        Ok(())
    }

    /// Returns the partition for `namespace`.
    ///
    /// A missing namespace is a wiring bug, never a runtime condition.
    pub fn must_get_partition(&self, namespace: &str) -> Result<CachePartition, InvariantViolation> {
        self.partitions
            .read()
            .get(namespace)
            .cloned()
            .ok_or_else(|| InvariantViolation::UnregisteredPartition(namespace.to_string()))
    }

    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.partitions.read().contains_key(namespace)
    }

    /// Registered namespaces, sorted.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        let mut namespaces: Vec<String> = self.partitions.read().keys().cloned().collect();
        namespaces.sort();
        namespaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = CacheRegistry::new();
        let partition = CachePartition::new("contact-by-id", Duration::from_secs(60));

        registry.register(partition.clone()).unwrap();

        assert!(registry.contains("contact-by-id"));
        assert_eq!(registry.must_get_partition("contact-by-id").unwrap(), partition);
    }

    #[test]
    fn test_duplicate_namespace_is_rejected() {
        let registry = CacheRegistry::new();
        registry
            .register(CachePartition::new("contact-by-id", Duration::from_secs(60)))
            .unwrap();

        let err = registry
            .register(CachePartition::new("contact-by-id", Duration::from_secs(5)))
            .unwrap_err();

        assert_eq!(err, InvariantViolation::DuplicatePartition("contact-by-id".to_string()));
        // The first registration stays in effect.
        assert_eq!(
            registry.must_get_partition("contact-by-id").unwrap().ttl(),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn test_empty_namespace_is_rejected() {
        let registry = CacheRegistry::new();
        let err = registry
            .register(CachePartition::new("", Duration::ZERO))
            .unwrap_err();
        assert_eq!(err, InvariantViolation::EmptyNamespace);
    }

    #[test]
    fn test_unregistered_namespace() {
        let registry = CacheRegistry::new();
        let err = registry.must_get_partition("contact-by-email").unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::UnregisteredPartition("contact-by-email".to_string())
        );
    }

    #[test]
    fn test_namespaces_are_sorted() {
        let registry = CacheRegistry::new();
        for namespace in ["b", "c", "a"] {
            registry
                .register(CachePartition::new(namespace, Duration::from_secs(1)))
                .unwrap();
        }
        assert_eq!(registry.namespaces(), ["a", "b", "c"]);
    }
}
