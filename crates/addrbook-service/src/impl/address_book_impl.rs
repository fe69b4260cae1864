//! Cache-aside address book implementation.

use crate::address_book::AddressBook;
use crate::cache::ContactCachePartition;
use addrbook_core::{AddrBookResult, Contact, ContactId, ContactToSave};
use addrbook_repository::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Address book backed by a repository, with reads served through the
/// contact cache.
///
/// Cache writes and invalidations run in the background; a request never
/// waits for them and never fails because of them.
pub struct AddressBookImpl {
    repository: Arc<dyn ContactRepository>,
    cache: ContactCachePartition,
}

impl AddressBookImpl {
    /// Creates a new address book.
    pub fn new(repository: Arc<dyn ContactRepository>, cache: ContactCachePartition) -> Self {
        Self { repository, cache }
    }

    fn parse_id(id: &str) -> Option<ContactId> {
        match ContactId::parse(id) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(id, error = %e, "Malformed contact id; treating as not found");
                None
            }
        }
    }
}

#[async_trait]
impl AddressBook for AddressBookImpl {
    async fn load_all_contacts(&self) -> AddrBookResult<Vec<Contact>> {
        debug!("Loading all contacts");
        self.repository.select_all_contacts().await
    }

    async fn load_contact_by_id(&self, id: &str) -> AddrBookResult<Option<Contact>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };

        if let Some(contact) = self.cache.get(id).await? {
            return Ok(Some(contact));
        }

        debug!("Loading contact {} from repository", id);
        let Some(contact) = self.repository.select_contact_by_id(id).await? else {
            return Ok(None);
        };

        self.cache.set(&contact)?;
        Ok(Some(contact))
    }

    async fn add_contact(&self, contact: ContactToSave) -> AddrBookResult<Contact> {
        debug!("Adding contact: {} {}", contact.first_name, contact.last_name);

        let saved = self.repository.add_contact(&contact).await?;
        self.cache.set(&saved)?;

        info!("Contact created: {}", saved.id);
        Ok(saved)
    }

    async fn update_contact(&self, id: &str, contact: ContactToSave) -> AddrBookResult<Option<Contact>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };

        debug!("Updating contact: {}", id);
        if !self.repository.update_contact(&Contact::from_saved(id, contact)).await? {
            return Ok(None);
        }

        // Cache what was stored, which may differ from what was submitted.
        let stored = self.repository.select_contact_by_id(id).await?;
        if let Some(stored) = &stored {
            self.cache.set(stored)?;
            info!("Contact updated: {}", id);
        }

        Ok(stored)
    }

    async fn delete_contact(&self, id: &str) -> AddrBookResult<bool> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(false);
        };

        let deleted = self.repository.delete_contact(id).await?;
        if deleted {
            self.cache.del(id)?;
            info!("Contact deleted: {}", id);
        }

        Ok(deleted)
    }
}
