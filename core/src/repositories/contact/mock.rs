//! Mock implementation of ContactRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

use super::ContactRepository;

/// Mock contact repository backed by an in-memory map
pub struct MockContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockContactRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Insert or replace a contact record
    pub async fn insert(&self, contact: Contact) {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id, contact);
    }

    /// Make subsequent lookups fail with an internal error
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "simulated repository failure".to_string(),
            });
        }

        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).cloned())
    }
}
