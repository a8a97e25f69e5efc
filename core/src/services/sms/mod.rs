//! SMS notification module
//!
//! This module provides the full transactional SMS workflow including:
//! - Per-business configuration gating with provider credential checks
//! - Template rendering with `{name}` placeholder substitution
//! - Single and bulk dispatch through a pluggable transport
//! - Event builders that compose messages from sales, payments and shipping data
//! - A business-bound facade for call sites acting for one business

mod config;
mod notifier;
mod service;
pub mod templates;
mod traits;
mod transport;
mod types;

#[cfg(test)]
mod tests;

pub use config::SmsServiceConfig;
pub use notifier::SmsNotifier;
pub use service::SmsService;
pub use traits::SmsTransport;
pub use transport::MockSmsTransport;
pub use types::{
    BulkDispatchResult, DispatchData, DispatchResult, SmsStats, TransportPayload,
};
