//! Business entity representing a tenant account in the ShopText system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use st_shared::config::SmsSettings;

/// Business (tenant) entity whose settings gate SMS sending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier for the business
    pub id: Uuid,

    /// Display name of the business
    pub name: String,

    /// SMS provider settings blob, absent until the owner configures SMS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_settings: Option<SmsSettings>,
}

impl Business {
    /// Creates a new Business instance without SMS configured
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sms_settings: None,
        }
    }

    /// Attaches or replaces the SMS settings blob
    pub fn with_sms_settings(mut self, settings: SmsSettings) -> Self {
        self.sms_settings = Some(settings);
        self
    }

    /// Checks whether this business is currently able to send SMS
    pub fn is_sms_configured(&self) -> bool {
        self.sms_settings
            .as_ref()
            .map(SmsSettings::is_configured)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_business_has_no_sms_settings() {
        let business = Business::new("Wall Touch");

        assert_eq!(business.name, "Wall Touch");
        assert!(business.sms_settings.is_none());
        assert!(!business.is_sms_configured());
    }

    #[test]
    fn test_configured_business() {
        let business =
            Business::new("Wall Touch").with_sms_settings(SmsSettings::nexmo("key", "secret"));

        assert!(business.is_sms_configured());
    }

    #[test]
    fn test_incomplete_settings_leave_business_unconfigured() {
        let business = Business::new("Wall Touch").with_sms_settings(SmsSettings::nexmo("key", ""));

        assert!(!business.is_sms_configured());
    }
}
