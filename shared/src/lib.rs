//! Shared utilities and common types for ShopText services
//!
//! This crate provides common functionality used across the workspace:
//! - SMS provider configuration types
//! - Utility functions (phone validation and masking, currency formatting)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{CustomGateway, NexmoCredentials, SmsProvider, SmsSettings, TwilioCredentials};
pub use utils::{currency, phone};
