//! Common utility functions

pub mod currency;
pub mod phone;

// Re-export commonly used utilities
pub use currency::*;
pub use phone::*;
