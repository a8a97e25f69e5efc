//! Traits for transport integration

use async_trait::async_trait;

use super::types::TransportPayload;

/// Trait for the SMS transport collaborator
///
/// Implementations own provider-specific delivery (carrier APIs,
/// credentials, timeouts). The service hands over the payload and expects
/// a provider message id back; any failure comes back as a string detail
/// so transports stay decoupled from domain error types.
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Deliver one message, returning the provider message id
    async fn send(&self, payload: &TransportPayload) -> Result<String, String>;

    /// Short transport name for log fields
    fn name(&self) -> &str;
}
