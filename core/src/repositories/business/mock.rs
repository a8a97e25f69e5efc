//! Mock implementation of BusinessRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::business::Business;
use crate::errors::DomainError;

use super::BusinessRepository;

/// Mock business repository backed by an in-memory map
pub struct MockBusinessRepository {
    businesses: Arc<RwLock<HashMap<Uuid, Business>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockBusinessRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            businesses: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Insert or replace a business record
    pub async fn insert(&self, business: Business) {
        let mut businesses = self.businesses.write().await;
        businesses.insert(business.id, business);
    }

    /// Make subsequent lookups fail with an internal error
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for MockBusinessRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusinessRepository for MockBusinessRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "simulated repository failure".to_string(),
            });
        }

        let businesses = self.businesses.read().await;
        Ok(businesses.get(&id).cloned())
    }
}
