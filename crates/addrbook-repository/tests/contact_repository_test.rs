//! Integration tests for the MySQL contact repository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use addrbook_core::{Contact, ContactId, ContactToSave, HealthCheck, PhoneType};
use addrbook_repository::{
    ContactRepository, ContactRepositoryImpl, DatabaseHealthCheck, MySqlContactDaoImpl,
};
use common::TestDatabase;
use std::sync::Arc;

fn repository(db: &TestDatabase) -> ContactRepositoryImpl {
    ContactRepositoryImpl::new(Arc::new(MySqlContactDaoImpl::new(db.pool())))
}

fn ann() -> ContactToSave {
    ContactToSave::new("Ann", "Lee")
        .with_phone(PhoneType::Mobile, "123")
        .with_phone(PhoneType::Work, "456")
}

#[tokio::test]
async fn test_add_and_select_by_id() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let added = repo.add_contact(&ann()).await.expect("Failed to add contact");

    let found = repo
        .select_contact_by_id(added.id)
        .await
        .expect("Query failed")
        .expect("Contact not found");

    assert_eq!(found, added);
    assert_eq!(found.phones[0].phone_type, PhoneType::Mobile);
    assert_eq!(found.phones[1].phone_number, "456");
}

#[tokio::test]
async fn test_select_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let result = repo
        .select_contact_by_id(ContactId::new())
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_select_all_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    for first in ["Ann", "Bob", "Cid"] {
        repo.add_contact(&ContactToSave::new(first, "Lee"))
            .await
            .expect("Failed to add contact");
    }

    let names: Vec<String> = repo
        .select_all_contacts()
        .await
        .expect("Query failed")
        .into_iter()
        .map(|c| c.first_name)
        .collect();

    assert_eq!(names, ["Ann", "Bob", "Cid"]);
}

#[tokio::test]
async fn test_update_existing_contact() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let mut contact = repo.add_contact(&ann()).await.expect("Failed to add contact");
    contact.last_name = "Park".to_string();
    contact.phones.truncate(1);

    assert!(repo.update_contact(&contact).await.expect("Update failed"));

    let found = repo
        .select_contact_by_id(contact.id)
        .await
        .expect("Query failed")
        .expect("Contact not found");
    assert_eq!(found.last_name, "Park");
    assert_eq!(found.phones.len(), 1);
}

#[tokio::test]
async fn test_update_without_changes_still_reports_found() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let contact = repo.add_contact(&ann()).await.expect("Failed to add contact");

    assert!(repo.update_contact(&contact).await.expect("Update failed"));
}

#[tokio::test]
async fn test_update_missing_contact() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let ghost = Contact::from_saved(ContactId::new(), ann());

    assert!(!repo.update_contact(&ghost).await.expect("Update failed"));
}

#[tokio::test]
async fn test_delete_contact() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let contact = repo.add_contact(&ann()).await.expect("Failed to add contact");

    assert!(repo.delete_contact(contact.id).await.expect("Delete failed"));
    assert!(!repo.delete_contact(contact.id).await.expect("Delete failed"));
    assert!(repo
        .select_contact_by_id(contact.id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
async fn test_database_health_check() {
    let db = TestDatabase::new().await;
    let check = DatabaseHealthCheck::new(db.pool());

    assert_eq!(check.name(), "database");
    assert!(check.check().await.is_healthy());
}
