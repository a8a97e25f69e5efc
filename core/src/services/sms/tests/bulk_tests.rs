//! Unit tests for bulk dispatch ordering, pacing and partial failure

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::business::MockBusinessRepository;
use crate::repositories::contact::MockContactRepository;
use crate::services::sms::{SmsService, SmsServiceConfig};

use super::mocks::{configured_business, RecordingTransport};

fn bulk_service(
    transport: Arc<RecordingTransport>,
    interval: Duration,
) -> (
    SmsService<MockBusinessRepository, MockContactRepository, RecordingTransport>,
    Arc<MockBusinessRepository>,
) {
    let business_repo = Arc::new(MockBusinessRepository::new());
    let contact_repo = Arc::new(MockContactRepository::new());
    let config = SmsServiceConfig::default().with_bulk_send_interval(interval);
    let service = SmsService::new(business_repo.clone(), contact_repo, transport, config);
    (service, business_repo)
}

fn mobiles(numbers: &[&str]) -> Vec<String> {
    numbers.iter().map(|m| m.to_string()).collect()
}

#[tokio::test]
async fn test_bulk_sends_to_all_recipients_in_order() {
    let transport = Arc::new(RecordingTransport::new(false));
    let (service, business_repo) = bulk_service(transport.clone(), Duration::ZERO);

    let business = configured_business();
    let business_id = business.id;
    business_repo.insert(business).await;

    let recipients = mobiles(&["01711111111", "01822222222", "01933333333"]);
    let results = service
        .send_bulk_sms(&recipients, "stock arriving tomorrow", business_id)
        .await;

    assert_eq!(results.len(), 3);
    for (entry, expected) in results.iter().zip(&recipients) {
        assert_eq!(&entry.mobile, expected);
        assert!(entry.result.success);
    }

    // Transport saw them in input order
    let sent = transport.sent_messages.lock().unwrap().clone();
    let sent_mobiles: Vec<&str> = sent.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(sent_mobiles, vec!["01711111111", "01822222222", "01933333333"]);
}

#[tokio::test]
async fn test_bulk_continues_past_failed_destination() {
    let mut transport = RecordingTransport::new(false);
    transport.fail_for = Some("01822222222".to_string());
    let transport = Arc::new(transport);
    let (service, business_repo) = bulk_service(transport.clone(), Duration::ZERO);

    let business = configured_business();
    let business_id = business.id;
    business_repo.insert(business).await;

    let recipients = mobiles(&["01711111111", "01822222222", "01933333333"]);
    let results = service
        .send_bulk_sms(&recipients, "stock arriving tomorrow", business_id)
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].result.success);
    assert!(!results[1].result.success);
    assert!(results[2].result.success);

    // The failed entry keeps its destination tag and failure detail
    assert_eq!(results[1].mobile, "01822222222");
    assert_eq!(
        results[1].result.message,
        "Failed to send SMS: provider rejected the message"
    );
    assert_eq!(transport.sent_count(), 2);
}

#[tokio::test]
async fn test_bulk_paces_between_sends() {
    let transport = Arc::new(RecordingTransport::new(false));
    let (service, business_repo) = bulk_service(transport, Duration::from_millis(50));

    let business = configured_business();
    let business_id = business.id;
    business_repo.insert(business).await;

    let recipients = mobiles(&["01711111111", "01822222222", "01933333333"]);
    let start = tokio::time::Instant::now();
    service
        .send_bulk_sms(&recipients, "stock arriving tomorrow", business_id)
        .await;
    let elapsed = start.elapsed();

    // Two gaps of 50ms between three sends
    assert!(
        elapsed.as_millis() >= 100,
        "expected at least 100ms of pacing, got {}ms",
        elapsed.as_millis()
    );
}

#[tokio::test]
async fn test_bulk_with_empty_recipient_list() {
    let transport = Arc::new(RecordingTransport::new(false));
    let (service, business_repo) = bulk_service(transport.clone(), Duration::ZERO);

    let business = configured_business();
    let business_id = business.id;
    business_repo.insert(business).await;

    let results = service.send_bulk_sms(&[], "hello", business_id).await;

    assert!(results.is_empty());
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_bulk_unconfigured_business_fails_every_entry() {
    let transport = Arc::new(RecordingTransport::new(false));
    let (service, _) = bulk_service(transport.clone(), Duration::ZERO);

    let recipients = mobiles(&["01711111111", "01822222222"]);
    let results = service
        .send_bulk_sms(&recipients, "hello", uuid::Uuid::new_v4())
        .await;

    assert_eq!(results.len(), 2);
    for entry in &results {
        assert!(!entry.result.success);
        assert_eq!(entry.result.message, "SMS not configured for this business");
    }
    assert_eq!(transport.sent_count(), 0);
}
