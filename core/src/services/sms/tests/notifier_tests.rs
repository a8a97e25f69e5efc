//! Unit tests for the business-bound notification facade

use std::sync::Arc;

use crate::repositories::business::MockBusinessRepository;
use crate::repositories::contact::MockContactRepository;
use crate::services::sms::{SmsNotifier, SmsService, SmsServiceConfig};

use super::mocks::{configured_business, RecordingTransport};

async fn notifier_for_configured_business(
    transport: Arc<RecordingTransport>,
) -> SmsNotifier<MockBusinessRepository, MockContactRepository, RecordingTransport> {
    let business_repo = Arc::new(MockBusinessRepository::new());
    let contact_repo = Arc::new(MockContactRepository::new());

    let business = configured_business();
    let business_id = business.id;
    business_repo.insert(business).await;

    let service = Arc::new(SmsService::new(
        business_repo,
        contact_repo,
        transport,
        SmsServiceConfig::default(),
    ));
    SmsNotifier::new(service, business_id)
}

#[tokio::test]
async fn test_notifier_sends_for_bound_business() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport.clone()).await;

    let result = notifier.send_sms("01712968571", "hello").await;

    assert!(result.success);
    assert_eq!(transport.sent_count(), 1);
    assert!(notifier.is_sms_configured().await);
}

#[tokio::test]
async fn test_notifier_gate_follows_bound_business() {
    let transport = Arc::new(RecordingTransport::new(false));
    let business_repo = Arc::new(MockBusinessRepository::new());
    let contact_repo = Arc::new(MockContactRepository::new());

    // A configured business exists, but the facade is bound to another
    business_repo.insert(configured_business()).await;

    let service = Arc::new(SmsService::new(
        business_repo,
        contact_repo,
        transport.clone(),
        SmsServiceConfig::default(),
    ));
    let notifier = SmsNotifier::new(service, uuid::Uuid::new_v4());

    let result = notifier.send_sms("01712968571", "hello").await;

    assert!(!result.success);
    assert_eq!(result.message, "SMS not configured for this business");
    assert!(!notifier.is_sms_configured().await);
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_payment_confirmation_with_cheque() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport.clone()).await;

    let result = notifier
        .send_payment_confirmation_sms("01712968571", 5000.0, "cheque", Some("CHQ-99"), 1200.5)
        .await;

    assert!(result.success);
    let (_, body) = transport.last_message().unwrap();
    assert_eq!(
        body,
        "Paid: ৳5,000.00 via cheque | Cheque: CHQ-99 | Current Due: ৳1,200.50 | পেমেন্ট প্রদান করা হয়েছে – WALL TOUCH, Hotline: 01712968571"
    );
}

#[tokio::test]
async fn test_payment_confirmation_cheque_segment_needs_cheque_method() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport.clone()).await;

    // Cheque number given but the method is cash
    let result = notifier
        .send_payment_confirmation_sms("01712968571", 500.0, "cash", Some("CHQ-99"), 0.0)
        .await;

    assert!(result.success);
    let (_, body) = transport.last_message().unwrap();
    assert!(!body.contains("Cheque"));
    assert!(body.starts_with("Paid: ৳500.00 via cash | Current Due: ৳0.00"));
}

#[tokio::test]
async fn test_payment_confirmation_ignores_empty_cheque_number() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport.clone()).await;

    let result = notifier
        .send_payment_confirmation_sms("01712968571", 500.0, "cheque", Some(""), 100.0)
        .await;

    assert!(result.success);
    let (_, body) = transport.last_message().unwrap();
    assert!(!body.contains("Cheque"));
}

#[tokio::test]
async fn test_supplier_welcome_uses_bengali_text() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport.clone()).await;

    let result = notifier
        .send_supplier_welcome_sms("Karim Traders", "01912223344")
        .await;

    assert!(result.success);
    let (_, body) = transport.last_message().unwrap();
    assert!(body.starts_with("Dear Karim Traders, আপনি সফলভাবে আমাদের Vendor List-এ যুক্ত হয়েছেন।"));
    assert!(body.ends_with("– WALL TOUCH, Hotline: 01712968571"));
}

#[tokio::test]
async fn test_notifier_exposes_bound_business_id() {
    let transport = Arc::new(RecordingTransport::new(false));
    let notifier = notifier_for_configured_business(transport).await;

    // The facade never falls back to any ambient id
    assert_ne!(notifier.business_id(), uuid::Uuid::nil());
}
