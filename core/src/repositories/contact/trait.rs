//! Contact repository trait defining the interface for contact lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::contact::Contact;
use crate::errors::DomainError;

/// Repository trait for Contact entity lookups
///
/// Event builders use this to late-load the contact behind a transaction
/// when the caller did not attach it.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a contact by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Contact))` - Contact found
    /// * `Ok(None)` - No contact with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, DomainError>;
}
