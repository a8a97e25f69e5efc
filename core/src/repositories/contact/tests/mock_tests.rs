//! Unit tests for mock contact repository

use uuid::Uuid;

use crate::domain::entities::contact::{Contact, ContactType};
use crate::errors::DomainError;
use crate::repositories::contact::{ContactRepository, MockContactRepository};

#[tokio::test]
async fn test_mock_repository_insert_and_find() {
    let repo = MockContactRepository::new();

    let contact = Contact::new(Uuid::new_v4(), "Rahim Uddin", ContactType::Customer)
        .with_mobile("01712968571");
    let id = contact.id;
    repo.insert(contact).await;

    let found = repo.find_by_id(id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().mobile_number(), Some("01712968571"));
}

#[tokio::test]
async fn test_mock_repository_missing_contact() {
    let repo = MockContactRepository::new();

    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_mock_repository_simulated_failure() {
    let repo = MockContactRepository::new();
    repo.set_should_fail(true).await;

    let result = repo.find_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
