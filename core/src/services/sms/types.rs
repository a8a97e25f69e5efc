//! Types for SMS dispatch results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use st_shared::config::SmsSettings;

/// Destination and final text of a successfully dispatched message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchData {
    /// Destination mobile number
    pub mobile: String,
    /// Final message text handed to the transport
    pub message: String,
}

/// Uniform result of one dispatch attempt
///
/// Every template and event path funnels into this shape; callers log or
/// ignore failures without their own workflow being affected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchResult {
    /// Whether the message was handed to the transport
    pub success: bool,
    /// Human-readable outcome message
    pub message: String,
    /// Destination and text, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DispatchData>,
}

impl DispatchResult {
    /// Successful dispatch of the given message
    pub fn sent(mobile: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "SMS sent successfully".to_string(),
            data: Some(DispatchData {
                mobile: mobile.into(),
                message: message.into(),
            }),
        }
    }

    /// Failed dispatch with the given outcome message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Per-destination entry in a bulk dispatch result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDispatchResult {
    /// Destination this entry belongs to
    pub mobile: String,
    /// Dispatch outcome for this destination
    #[serde(flatten)]
    pub result: DispatchResult,
}

/// SMS usage statistics for a business
///
/// Extension point: the counters are not tracked anywhere yet and stay at
/// zero; only the configured flag is live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsStats {
    /// Whether SMS is currently configured for the business
    pub configured: bool,
    /// Messages sent (not yet tracked)
    pub total_sent: u64,
    /// Failed sends (not yet tracked)
    pub failed_count: u64,
    /// Timestamp of the last send (not yet tracked)
    pub last_sent: Option<DateTime<Utc>>,
}

/// Payload handed to the transport collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportPayload {
    /// Provider settings of the sending business
    pub sms_settings: SmsSettings,
    /// Destination mobile number
    pub mobile_number: String,
    /// Final message text
    pub sms_body: String,
}
