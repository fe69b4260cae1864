//! ContactDao trait: low-level contact data access.
//!
//! Implementations connect directly to a single data source.
//! [`ContactRepository`] uses a `ContactDao` to fulfil domain-level operations.
//!
//! [`ContactRepository`]: crate::traits::ContactRepository

use addrbook_core::{AddrBookResult, Contact, ContactId, Interface};
use async_trait::async_trait;

/// Low-level contact data access object.
#[async_trait]
pub trait ContactDao: Interface + Send + Sync {
    /// Returns all contacts in insertion order.
    async fn find_all(&self) -> AddrBookResult<Vec<Contact>>;

    /// Finds a contact by ID.
    async fn find_by_id(&self, id: ContactId) -> AddrBookResult<Option<Contact>>;

    /// Inserts a contact whose ID is already assigned.
    async fn insert(&self, contact: &Contact) -> AddrBookResult<()>;

    /// Replaces an existing contact. Returns `true` if a row with the ID exists.
    async fn replace(&self, contact: &Contact) -> AddrBookResult<bool>;

    /// Deletes a contact by ID. Returns `true` if deleted.
    async fn delete(&self, id: ContactId) -> AddrBookResult<bool>;
}
