//! Mock SMS transport implementation
//!
//! A mock implementation of the transport collaborator for development and
//! testing. It logs messages to the console instead of delivering them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use st_shared::utils::phone::{is_valid_phone, mask_phone_number};

use super::traits::SmsTransport;
use super::types::TransportPayload;

/// Mock SMS transport for development and testing
///
/// This implementation:
/// - Logs messages to console
/// - Validates destination numbers
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsTransport {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
            console_output: true,
        }
    }

    /// Create a mock transport with console output disabled
    pub fn quiet() -> Self {
        Self {
            console_output: false,
            ..Self::new()
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockSmsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsTransport for MockSmsTransport {
    async fn send(&self, payload: &TransportPayload) -> Result<String, String> {
        let masked_phone = mask_phone_number(&payload.mobile_number);

        // Validate destination number format
        if !is_valid_phone(&payload.mobile_number) {
            return Err(format!("Invalid phone number format: {}", masked_phone));
        }

        // Simulate failure if configured
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                "Mock SMS transport simulating failure for phone: {}",
                masked_phone
            );
            return Err("Simulated SMS sending failure".to_string());
        }

        // Generate mock message ID
        let message_id = format!("mock_{}", Uuid::new_v4());

        // Increment message counter
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("📱 MOCK SMS TRANSPORT - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", payload.mobile_number, masked_phone);
            println!("Provider: {}", payload.sms_settings.provider_name());
            println!("Message ID: {}", message_id);
            println!("Content: {}", payload.sms_body);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for production
        info!(
            target: "sms_transport",
            provider = payload.sms_settings.provider_name(),
            phone = %masked_phone,
            message_id = %message_id,
            message_length = payload.sms_body.len(),
            "SMS sent successfully (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(message_id)
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_shared::config::SmsSettings;

    fn payload(mobile: &str) -> TransportPayload {
        TransportPayload {
            sms_settings: SmsSettings::nexmo("key", "secret"),
            mobile_number: mobile.to_string(),
            sms_body: "test message".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_returns_mock_message_id() {
        let transport = MockSmsTransport::quiet();

        let message_id = transport.send(&payload("01712968571")).await.unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(transport.message_count(), 1);
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_phone() {
        let transport = MockSmsTransport::quiet();

        let result = transport.send(&payload("not-a-number")).await;
        assert!(result.is_err());
        assert_eq!(transport.message_count(), 0);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let transport = MockSmsTransport::quiet();
        transport.set_simulate_failure(true);

        let result = transport.send(&payload("01712968571")).await;
        assert_eq!(result.unwrap_err(), "Simulated SMS sending failure");

        transport.set_simulate_failure(false);
        assert!(transport.send(&payload("01712968571")).await.is_ok());
    }
}
