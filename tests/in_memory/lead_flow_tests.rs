//! Intake-to-conversion flows over in-memory adapters.

use super::helpers::{lead_stack, seed_catalog};
use atelier::directory::ports::ClientRepository;
use atelier::lead::domain::{FollowUpKind, LeadStatus};
use atelier::lead::services::{CreateInquiryRequest, FollowUpRequest};
use chrono::{Duration, Utc};

#[tokio::test(flavor = "multi_thread")]
async fn a_lead_travels_from_intake_to_client() {
    let stack = lead_stack();
    seed_catalog(&stack.catalog).await;

    let inquiry = stack
        .intake
        .create_inquiry(
            CreateInquiryRequest::new("Ana Torres", "ana@example.com")
                .with_phone("555-1234")
                .with_message("Busco un vestido talla M para un evento")
                .with_product("vestido rojo", 8),
        )
        .await
        .expect("intake should succeed");

    assert!(inquiry.tags().contains("vestido"));
    assert!(inquiry.tags().contains("cantidad-alta"));
    assert!(
        inquiry
            .product_lines()
            .first()
            .and_then(|line| line.product_id())
            .is_some(),
        "the requested name should link to the seeded catalog"
    );

    stack
        .lifecycle
        .transition_status(inquiry.id(), LeadStatus::Hot)
        .await
        .expect("transition should succeed");
    stack
        .lifecycle
        .record_follow_up(
            inquiry.id(),
            FollowUpRequest::new(FollowUpKind::Call, "Llamada inicial")
                .with_reminder(Utc::now() + Duration::days(2)),
        )
        .await
        .expect("follow-up should succeed");

    let client = stack
        .lifecycle
        .convert_to_client(inquiry.id())
        .await
        .expect("conversion should succeed");
    assert_eq!(client.source_inquiry(), Some(inquiry.id()));

    let stored = stack
        .clients
        .find_by_source_inquiry(inquiry.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored.map(|c| c.id()), Some(client.id()));

    let refreshed = stack
        .lifecycle
        .find_inquiry(inquiry.id())
        .await
        .expect("lookup should succeed")
        .expect("inquiry should exist");
    assert!(refreshed.is_converted_to_client());
    assert_eq!(refreshed.follow_ups().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn conversion_cannot_run_twice_even_across_services() {
    let stack = lead_stack();

    let inquiry = stack
        .intake
        .create_inquiry(CreateInquiryRequest::new("Luis", "luis@example.com"))
        .await
        .expect("intake should succeed");

    stack
        .lifecycle
        .convert_to_client(inquiry.id())
        .await
        .expect("first conversion should succeed");
    let second = stack.lifecycle.convert_to_client(inquiry.id()).await;
    assert!(second.is_err(), "second conversion must be rejected");

    let clients = stack.clients.list().await.expect("listing should succeed");
    assert_eq!(clients.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn typoed_product_names_do_not_block_intake() {
    let stack = lead_stack();
    seed_catalog(&stack.catalog).await;

    let inquiry = stack
        .intake
        .create_inquiry(
            CreateInquiryRequest::new("Eva", "eva@example.com")
                .with_product("bleizer gris", 1)
                .with_product("camisa", 2),
        )
        .await
        .expect("intake should succeed");

    let links: Vec<bool> = inquiry
        .product_lines()
        .iter()
        .map(|line| line.product_id().is_some())
        .collect();
    assert_eq!(links, vec![false, true], "typo skipped, exact fragment linked");
}
