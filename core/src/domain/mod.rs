//! Domain layer containing the business entities notifications are built from.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
