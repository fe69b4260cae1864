//! In-memory `ContactDao` implementation.
//!
//! Backs `database.type = "inmem"` and unit tests. Contents are lost on restart.

use crate::dao::ContactDao;
use addrbook_core::{AddrBookError, AddrBookResult, Contact, ContactId};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

/// Contacts kept in insertion order behind a lock.
#[derive(Default)]
pub struct InMemoryContactDaoImpl {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactDaoImpl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}

#[async_trait]
impl ContactDao for InMemoryContactDaoImpl {
    async fn find_all(&self) -> AddrBookResult<Vec<Contact>> {
        Ok(self.contacts.read().clone())
    }

    async fn find_by_id(&self, id: ContactId) -> AddrBookResult<Option<Contact>> {
        Ok(self.contacts.read().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, contact: &Contact) -> AddrBookResult<()> {
        let mut contacts = self.contacts.write();
        if contacts.iter().any(|c| c.id == contact.id) {
            return Err(AddrBookError::Database(format!(
                "Duplicate entry '{}' for key 'PRIMARY'",
                contact.id
            )));
        }
        debug!(contact_id = %contact.id, "Inserting contact");
        contacts.push(contact.clone());
        Ok(())
    }

    async fn replace(&self, contact: &Contact) -> AddrBookResult<bool> {
        let mut contacts = self.contacts.write();
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(stored) => {
                *stored = contact.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ContactId) -> AddrBookResult<bool> {
        let mut contacts = self.contacts.write();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_core::{ContactToSave, PhoneType};

    fn contact(first: &str) -> Contact {
        Contact::from_saved(
            ContactId::new(),
            ContactToSave::new(first, "Lee").with_phone(PhoneType::Mobile, "123"),
        )
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let dao = InMemoryContactDaoImpl::new();
        for name in ["Ann", "Bob", "Cid"] {
            dao.insert(&contact(name)).await.unwrap();
        }

        let names: Vec<_> = dao
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.first_name)
            .collect();
        assert_eq!(names, ["Ann", "Bob", "Cid"]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let dao = InMemoryContactDaoImpl::new();
        let ann = contact("Ann");
        dao.insert(&ann).await.unwrap();

        let err = dao.insert(&ann).await.unwrap_err();
        assert!(matches!(err, AddrBookError::Database(_)));
        assert_eq!(dao.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_missing_contact() {
        let dao = InMemoryContactDaoImpl::new();
        assert!(!dao.replace(&contact("Ann")).await.unwrap());
        assert!(dao.is_empty());
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let dao = InMemoryContactDaoImpl::new();
        let mut ann = contact("Ann");
        dao.insert(&ann).await.unwrap();

        ann.last_name = "Park".to_string();
        assert!(dao.replace(&ann).await.unwrap());
        assert_eq!(dao.find_by_id(ann.id).await.unwrap().unwrap().last_name, "Park");

        assert!(dao.delete(ann.id).await.unwrap());
        assert!(!dao.delete(ann.id).await.unwrap());
        assert!(dao.find_by_id(ann.id).await.unwrap().is_none());
    }
}
