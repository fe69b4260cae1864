//! Typed cache partition holding contacts by id.

use super::{CacheKey, CachePartition, PartitionedCache};
use addrbook_core::{Contact, ContactId, InvariantViolation};
use std::sync::Arc;
use std::time::Duration;

/// Namespace of the contact-by-id partition.
pub const CONTACT_BY_ID_NAMESPACE: &str = "contact-by-id";

/// Contacts keyed by their id.
///
/// Registering the partition is the only way to obtain one, so every key
/// this type produces belongs to a registered namespace.
#[derive(Debug, Clone)]
pub struct ContactCachePartition {
    cache: Arc<PartitionedCache>,
}

impl ContactCachePartition {
    /// Registers the `contact-by-id` namespace with `ttl`.
    ///
    /// Fails if the namespace is already registered on this cache.
    pub fn register(cache: Arc<PartitionedCache>, ttl: Duration) -> Result<Self, InvariantViolation> {
        cache
            .registry()
            .register(CachePartition::new(CONTACT_BY_ID_NAMESPACE, ttl))?;
        Ok(Self { cache })
    }

    fn key(id: ContactId) -> CacheKey {
        CacheKey::new(CONTACT_BY_ID_NAMESPACE, id.to_string())
    }

    pub async fn get(&self, id: ContactId) -> Result<Option<Contact>, InvariantViolation> {
        self.cache.get(&Self::key(id)).await
    }

    /// Schedules a background write of `contact` under its own id.
    pub fn set(&self, contact: &Contact) -> Result<(), InvariantViolation> {
        self.cache.set(&Self::key(contact.id), contact)
    }

    /// Schedules a background removal of the entry for `id`.
    pub fn del(&self, id: ContactId) -> Result<(), InvariantViolation> {
        self.cache.del(&Self::key(id))
    }

    /// Resolves once background writes and deletes have finished.
    pub async fn wait_idle(&self) {
        self.cache.wait_idle().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheRegistry, InMemoryCache};
    use addrbook_core::{ContactToSave, PhoneType};

    fn partitioned_cache() -> Arc<PartitionedCache> {
        Arc::new(PartitionedCache::new(
            Arc::new(InMemoryCache::new(100)),
            Arc::new(CacheRegistry::new()),
            Duration::from_secs(1),
        ))
    }

    fn contact() -> Contact {
        Contact::from_saved(
            ContactId::new(),
            ContactToSave::new("Ada", "Lovelace").with_phone(PhoneType::Mobile, "+44 20 7946 0000"),
        )
    }

    #[tokio::test]
    async fn test_set_get_del() {
        let partition = ContactCachePartition::register(partitioned_cache(), Duration::from_secs(60)).unwrap();
        let contact = contact();

        partition.set(&contact).unwrap();
        partition.wait_idle().await;
        assert_eq!(partition.get(contact.id).await.unwrap(), Some(contact.clone()));

        partition.del(contact.id).unwrap();
        partition.wait_idle().await;
        assert_eq!(partition.get(contact.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_twice_fails() {
        let cache = partitioned_cache();
        ContactCachePartition::register(Arc::clone(&cache), Duration::from_secs(60)).unwrap();

        let err = ContactCachePartition::register(cache, Duration::from_secs(60)).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::DuplicatePartition(CONTACT_BY_ID_NAMESPACE.to_string())
        );
    }

    #[tokio::test]
    async fn test_entries_use_partition_ttl() {
        let partition = ContactCachePartition::register(partitioned_cache(), Duration::from_millis(50)).unwrap();
        let contact = contact();

        partition.set(&contact).unwrap();
        partition.wait_idle().await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(partition.get(contact.id).await.unwrap(), None);
    }
}
