//! Business services containing domain logic and use cases.

pub mod sms;

// Re-export commonly used types
pub use sms::{
    BulkDispatchResult, DispatchData, DispatchResult,
    MockSmsTransport, SmsNotifier, SmsService, SmsServiceConfig,
    SmsStats, SmsTransport, TransportPayload,
};

// Placeholder for future service modules
// pub mod email;
// pub mod delivery_log;
