//! `ContactRepositoryImpl`: repository layer implementation.
//!
//! Implements the [`ContactRepository`] interface on top of a [`ContactDao`]
//! and owns identity assignment for new contacts.
//!
//! ```text
//! AddressBook
//!   ↓ Arc<dyn ContactRepository>
//! ContactRepositoryImpl          ← assigns identities
//!   ↓ Arc<dyn ContactDao>
//! MySqlContactDaoImpl / InMemoryContactDaoImpl
//! ```
//!
//! [`ContactRepository`]: crate::traits::ContactRepository
//! [`ContactDao`]: crate::dao::ContactDao

use crate::{dao::ContactDao, traits::ContactRepository};
use addrbook_core::{AddrBookResult, Contact, ContactId, ContactToSave};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that delegates storage to a [`ContactDao`].
pub struct ContactRepositoryImpl {
    contact_dao: Arc<dyn ContactDao>,
}

impl ContactRepositoryImpl {
    /// Creates a new `ContactRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(contact_dao: Arc<dyn ContactDao>) -> Self {
        Self { contact_dao }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn select_all_contacts(&self) -> AddrBookResult<Vec<Contact>> {
        debug!("Repository: select_all_contacts");
        self.contact_dao.find_all().await
    }

    async fn select_contact_by_id(&self, id: ContactId) -> AddrBookResult<Option<Contact>> {
        debug!("Repository: select_contact_by_id {}", id);
        self.contact_dao.find_by_id(id).await
    }

    async fn add_contact(&self, contact: &ContactToSave) -> AddrBookResult<Contact> {
        let contact = Contact::from_saved(ContactId::new(), contact.clone());
        debug!("Repository: add_contact {}", contact.id);
        self.contact_dao.insert(&contact).await?;
        Ok(contact)
    }

    async fn update_contact(&self, contact: &Contact) -> AddrBookResult<bool> {
        debug!("Repository: update_contact {}", contact.id);
        self.contact_dao.replace(contact).await
    }

    async fn delete_contact(&self, id: ContactId) -> AddrBookResult<bool> {
        debug!("Repository: delete_contact {}", id);
        self.contact_dao.delete(id).await
    }
}

impl std::fmt::Debug for ContactRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactRepositoryImpl").finish_non_exhaustive()
    }
}
