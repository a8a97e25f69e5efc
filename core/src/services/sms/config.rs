//! Configuration for the SMS service

use std::time::Duration;

/// Configuration for the SMS service
#[derive(Debug, Clone)]
pub struct SmsServiceConfig {
    /// Minimum interval between consecutive sends in a bulk batch.
    /// Crude rate-limit mitigation, tune per provider limits.
    pub bulk_send_interval: Duration,
}

impl Default for SmsServiceConfig {
    fn default() -> Self {
        Self {
            bulk_send_interval: Duration::from_millis(100),
        }
    }
}

impl SmsServiceConfig {
    /// Set the pacing interval between bulk sends
    pub fn with_bulk_send_interval(mut self, interval: Duration) -> Self {
        self.bulk_send_interval = interval;
        self
    }
}
