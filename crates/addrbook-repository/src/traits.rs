//! Repository trait definitions.

use addrbook_core::{AddrBookResult, Contact, ContactId, ContactToSave, Interface};
use async_trait::async_trait;

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

/// Contact persistence, the system of record.
///
/// Absence is reported as `None` or `false`, never as an error.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait ContactRepository: Interface + Send + Sync {
    /// Returns every stored contact, oldest first.
    async fn select_all_contacts(&self) -> AddrBookResult<Vec<Contact>>;

    /// Finds a contact by ID.
    async fn select_contact_by_id(&self, id: ContactId) -> AddrBookResult<Option<Contact>>;

    /// Stores a new contact under a freshly assigned identity.
    async fn add_contact(&self, contact: &ContactToSave) -> AddrBookResult<Contact>;

    /// Replaces the stored contact with the same ID. Returns `false` if there is none.
    async fn update_contact(&self, contact: &Contact) -> AddrBookResult<bool>;

    /// Deletes a contact by ID. Returns `true` if deleted.
    async fn delete_contact(&self, id: ContactId) -> AddrBookResult<bool>;
}
