//! Domain-focused tests for client records.

use crate::directory::domain::{Client, ClientDomainError, NewClient};
use crate::lead::domain::InquiryId;
use crate::test_support::ManualClock;
use rstest::rstest;

fn new_client(name: &str, email: &str) -> NewClient {
    NewClient {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: None,
        source_inquiry: None,
    }
}

#[rstest]
fn client_creation_trims_contact_fields() {
    let clock = ManualClock::fixed();
    let client = Client::new(new_client("  María Pérez  ", " maria@example.com "), &clock)
        .expect("valid client");

    assert_eq!(client.name(), "María Pérez");
    assert_eq!(client.email(), "maria@example.com");
    assert!(client.source_inquiry().is_none());
}

#[rstest]
fn client_creation_rejects_blank_name() {
    let clock = ManualClock::fixed();
    let result = Client::new(new_client("   ", "maria@example.com"), &clock);
    assert_eq!(result, Err(ClientDomainError::EmptyName));
}

#[rstest]
fn client_creation_rejects_malformed_email() {
    let clock = ManualClock::fixed();
    let result = Client::new(new_client("María", "not-an-email"), &clock);
    assert_eq!(
        result,
        Err(ClientDomainError::InvalidEmail("not-an-email".to_owned()))
    );
}

#[rstest]
fn converted_client_keeps_its_source_inquiry() {
    let clock = ManualClock::fixed();
    let inquiry_id = InquiryId::new();
    let client = Client::new(
        NewClient {
            name: "María Pérez".to_owned(),
            email: "maria@example.com".to_owned(),
            phone: Some("555-1234".to_owned()),
            source_inquiry: Some(inquiry_id),
        },
        &clock,
    )
    .expect("valid client");

    assert_eq!(client.source_inquiry(), Some(inquiry_id));
    assert_eq!(client.phone(), Some("555-1234"));
}
