//! Business repository trait defining the interface for business lookups.
//!
//! The notification services only ever read business records: the settings
//! blob on the business decides whether a dispatch is attempted. Hosts back
//! this trait with their own storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::business::Business;
use crate::errors::DomainError;

/// Repository trait for Business entity lookups
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use st_core::repositories::BusinessRepository;
/// use st_core::domain::entities::business::Business;
/// use st_core::errors::DomainError;
///
/// struct MySqlBusinessRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl BusinessRepository for MySqlBusinessRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the business
    ///
    /// # Returns
    /// * `Ok(Some(Business))` - Business found
    /// * `Ok(None)` - No business with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, DomainError>;
}
