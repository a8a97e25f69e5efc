//! Per-business SMS provider settings
//!
//! The settings blob lives on the business record (stored as JSON alongside
//! the rest of the business profile) and is read-only to the notification
//! services. `SmsSettings::is_configured` is the single gate that decides
//! whether dispatch is attempted for a business.

use serde::{Deserialize, Serialize};

/// SMS gateway selector stored in a business's settings blob.
///
/// Selector strings this release does not recognize deserialize to
/// `Unknown` so the configuration gate fails closed instead of erroring
/// on stale or hand-edited settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// SMS sending disabled for this business
    #[default]
    None,

    /// Nexmo (Vonage) REST gateway
    Nexmo,

    /// Twilio messaging gateway
    Twilio,

    /// Self-hosted or aggregator gateway addressed by URL
    Custom,

    /// Unrecognized selector value
    #[serde(other)]
    Unknown,
}

/// Nexmo credential block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NexmoCredentials {
    /// API key
    #[serde(default)]
    pub key: String,

    /// API secret
    #[serde(default)]
    pub secret: String,
}

/// Twilio credential block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TwilioCredentials {
    /// Account SID
    #[serde(default)]
    pub sid: String,

    /// Auth token
    #[serde(default)]
    pub token: String,
}

/// Custom gateway block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomGateway {
    /// Endpoint URL the transport posts to
    #[serde(default)]
    pub url: String,
}

/// SMS settings blob attached to a business record
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SmsSettings {
    /// Selected gateway, absent when the business never configured SMS
    #[serde(default)]
    pub sms_service: Option<SmsProvider>,

    /// Nexmo credentials, present only when that gateway was configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexmo: Option<NexmoCredentials>,

    /// Twilio credentials, present only when that gateway was configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twilio: Option<TwilioCredentials>,

    /// Custom gateway settings, present only when that gateway was configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomGateway>,
}

impl SmsSettings {
    /// Create settings for a Nexmo-backed business
    pub fn nexmo(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            sms_service: Some(SmsProvider::Nexmo),
            nexmo: Some(NexmoCredentials {
                key: key.into(),
                secret: secret.into(),
            }),
            ..Default::default()
        }
    }

    /// Create settings for a Twilio-backed business
    pub fn twilio(sid: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            sms_service: Some(SmsProvider::Twilio),
            twilio: Some(TwilioCredentials {
                sid: sid.into(),
                token: token.into(),
            }),
            ..Default::default()
        }
    }

    /// Create settings for a custom-gateway business
    pub fn custom(url: impl Into<String>) -> Self {
        Self {
            sms_service: Some(SmsProvider::Custom),
            custom: Some(CustomGateway { url: url.into() }),
            ..Default::default()
        }
    }

    /// Whether the selected provider has every required credential field
    /// present and non-empty.
    ///
    /// Fails closed: a missing selector, an unknown selector, a missing
    /// credential block, or any empty required field all yield `false`.
    pub fn is_configured(&self) -> bool {
        match self.sms_service {
            Some(SmsProvider::Nexmo) => self
                .nexmo
                .as_ref()
                .map(|c| !c.key.is_empty() && !c.secret.is_empty())
                .unwrap_or(false),
            Some(SmsProvider::Twilio) => self
                .twilio
                .as_ref()
                .map(|c| !c.sid.is_empty() && !c.token.is_empty())
                .unwrap_or(false),
            Some(SmsProvider::Custom) => self
                .custom
                .as_ref()
                .map(|c| !c.url.is_empty())
                .unwrap_or(false),
            Some(SmsProvider::None) | Some(SmsProvider::Unknown) | None => false,
        }
    }

    /// Provider name for log fields
    pub fn provider_name(&self) -> &'static str {
        match self.sms_service {
            Some(SmsProvider::Nexmo) => "nexmo",
            Some(SmsProvider::Twilio) => "twilio",
            Some(SmsProvider::Custom) => "custom",
            Some(SmsProvider::None) => "none",
            Some(SmsProvider::Unknown) => "unknown",
            None => "unset",
        }
    }
}
