//! Address book service trait definition.

use addrbook_core::{AddrBookResult, Contact, ContactToSave, Interface};
use async_trait::async_trait;

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

/// Contact operations exposed to the HTTP layer.
///
/// Identifiers arrive as raw strings from the request path. A string that is
/// not a valid contact id cannot name a stored contact, so it is reported the
/// same way as an unknown id: `None` or `false`.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait AddressBook: Interface + Send + Sync {
    /// Lists every contact, read straight from persistence.
    async fn load_all_contacts(&self) -> AddrBookResult<Vec<Contact>>;

    /// Gets a contact by id, serving from the cache when possible.
    async fn load_contact_by_id(&self, id: &str) -> AddrBookResult<Option<Contact>>;

    /// Creates a contact under a new id.
    async fn add_contact(&self, contact: ContactToSave) -> AddrBookResult<Contact>;

    /// Replaces the contact with `id`. Returns the stored form, or `None` if
    /// there is no such contact.
    async fn update_contact(&self, id: &str, contact: ContactToSave) -> AddrBookResult<Option<Contact>>;

    /// Deletes the contact with `id`. Returns `true` if it existed.
    async fn delete_contact(&self, id: &str) -> AddrBookResult<bool>;
}
