//! Configuration types shared across the workspace
//!
//! - `sms` - Per-business SMS provider settings and the configuration gate

pub mod sms;

// Re-export commonly used types
pub use sms::{CustomGateway, NexmoCredentials, SmsProvider, SmsSettings, TwilioCredentials};
