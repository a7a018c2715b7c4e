//! Service orchestration tests for follow-ups, transitions, and conversion.

use std::sync::Arc;

use crate::directory::{adapters::memory::InMemoryClientRepository, ports::ClientRepository};
use crate::lead::{
    adapters::memory::InMemoryInquiryRepository,
    domain::{FollowUpKind, Inquiry, InquiryId, LeadDomainError, LeadStatus, NewInquiry},
    ports::InquiryRepository,
    services::{FollowUpRequest, LeadLifecycleError, LeadLifecycleService},
};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::collections::BTreeSet;

type TestLifecycle =
    LeadLifecycleService<InMemoryInquiryRepository, InMemoryClientRepository, DefaultClock>;

struct Harness {
    lifecycle: TestLifecycle,
    inquiries: Arc<InMemoryInquiryRepository>,
    clients: Arc<InMemoryClientRepository>,
}

#[fixture]
fn harness() -> Harness {
    let inquiries = Arc::new(InMemoryInquiryRepository::new());
    let clients = Arc::new(InMemoryClientRepository::new());
    let lifecycle = LeadLifecycleService::new(
        Arc::clone(&inquiries),
        Arc::clone(&clients),
        Arc::new(DefaultClock),
    );
    Harness {
        lifecycle,
        inquiries,
        clients,
    }
}

async fn seed_inquiry(repo: &InMemoryInquiryRepository) -> InquiryId {
    let inquiry = Inquiry::new(
        NewInquiry {
            name: "Ana Torres".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: Some("555-1234".to_owned()),
            message: None,
            priority: crate::lead::domain::LeadPriority::Medium,
            product_lines: Vec::new(),
            tags: BTreeSet::new(),
        },
        &DefaultClock,
    )
    .expect("valid inquiry");
    repo.insert(&inquiry).await.expect("seed insert should succeed");
    inquiry.id()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn follow_up_appends_history_and_schedules_reminder(harness: Harness) {
    let id = seed_inquiry(&harness.inquiries).await;
    let reminder = Utc::now() + Duration::days(2);

    let updated = harness
        .lifecycle
        .record_follow_up(
            id,
            FollowUpRequest::new(FollowUpKind::Call, "Primera llamada")
                .with_outcome("Pidió presupuesto")
                .with_next_action("Enviar presupuesto")
                .with_reminder(reminder),
        )
        .await
        .expect("follow-up should succeed");

    assert_eq!(updated.follow_ups().len(), 1);
    assert_eq!(updated.next_follow_up_at(), Some(reminder));
    assert!(updated.last_contact_at().is_some());
    let recorded = updated.follow_ups().first().expect("one follow-up");
    assert_eq!(recorded.outcome(), Some("Pidió presupuesto"));
    assert_eq!(recorded.next_action(), Some("Enviar presupuesto"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_transitions_are_persisted(harness: Harness) {
    let id = seed_inquiry(&harness.inquiries).await;

    harness
        .lifecycle
        .transition_status(id, LeadStatus::Hot)
        .await
        .expect("transition should succeed");
    let updated = harness
        .lifecycle
        .transition_status(id, LeadStatus::Contacted)
        .await
        .expect("transition should succeed");

    assert_eq!(updated.status(), LeadStatus::Contacted);
    let hot = harness
        .lifecycle
        .pipeline(LeadStatus::Hot)
        .await
        .expect("listing should succeed");
    assert!(hot.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn conversion_creates_a_client_carrying_the_contact_details(harness: Harness) {
    let id = seed_inquiry(&harness.inquiries).await;

    let client = harness
        .lifecycle
        .convert_to_client(id)
        .await
        .expect("conversion should succeed");

    assert_eq!(client.name(), "Ana Torres");
    assert_eq!(client.email(), "ana@example.com");
    assert_eq!(client.phone(), Some("555-1234"));
    assert_eq!(client.source_inquiry(), Some(id));

    let stored = harness
        .clients
        .find_by_source_inquiry(id)
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.map(|c| c.id()), Some(client.id()));

    let inquiry = harness
        .lifecycle
        .find_inquiry(id)
        .await
        .expect("lookup should succeed")
        .expect("inquiry should exist");
    assert!(inquiry.is_converted_to_client());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn conversion_is_rejected_the_second_time(harness: Harness) {
    let id = seed_inquiry(&harness.inquiries).await;

    harness
        .lifecycle
        .convert_to_client(id)
        .await
        .expect("first conversion should succeed");
    let second = harness.lifecycle.convert_to_client(id).await;

    assert!(matches!(
        second,
        Err(LeadLifecycleError::Domain(LeadDomainError::AlreadyConverted(converted))) if converted == id
    ));

    let clients = harness.clients.list().await.expect("listing should succeed");
    assert_eq!(clients.len(), 1, "no duplicate client may be created");
}
