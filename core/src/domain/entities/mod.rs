//! Domain entities representing core business objects.

pub mod business;
pub mod contact;
pub mod payment;
pub mod transaction;

// Placeholder for future entity modules
// pub mod product;

// Re-export commonly used types
pub use business::Business;
pub use contact::{Contact, ContactType};
pub use payment::Payment;
pub use transaction::Transaction;
