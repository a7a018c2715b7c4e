//! Inquiry aggregate root.

use super::{FollowUp, InquiryId, LeadDomainError, LeadPriority, LeadStatus, ProductLine};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parameter object for creating a fresh inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    /// Contact display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional free-form message.
    pub message: Option<String>,
    /// Urgency level.
    pub priority: LeadPriority,
    /// Requested product associations, linked where resolution succeeded.
    pub product_lines: Vec<ProductLine>,
    /// Creation-time tag snapshot.
    pub tags: BTreeSet<String>,
}

/// Parameter object for reconstructing a persisted inquiry aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInquiryData {
    /// Persisted inquiry identifier.
    pub id: InquiryId,
    /// Persisted contact name.
    pub name: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted phone number, if any.
    pub phone: Option<String>,
    /// Persisted message, if any.
    pub message: Option<String>,
    /// Persisted pipeline status.
    pub status: LeadStatus,
    /// Persisted urgency level.
    pub priority: LeadPriority,
    /// Persisted tag snapshot.
    pub tags: BTreeSet<String>,
    /// Persisted product associations.
    pub product_lines: Vec<ProductLine>,
    /// Persisted follow-up history, oldest first.
    pub follow_ups: Vec<FollowUp>,
    /// Persisted last contact timestamp, if any.
    pub last_contact_at: Option<DateTime<Utc>>,
    /// Persisted next follow-up reminder, if any.
    pub next_follow_up_at: Option<DateTime<Utc>>,
    /// Persisted conversion flag.
    pub converted_to_client: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Inquiry aggregate root.
///
/// The tag set is a creation-time snapshot: editing the message later does
/// not recompute it, and no mutator for tags exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    id: InquiryId,
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    status: LeadStatus,
    priority: LeadPriority,
    tags: BTreeSet<String>,
    product_lines: Vec<ProductLine>,
    follow_ups: Vec<FollowUp>,
    last_contact_at: Option<DateTime<Utc>>,
    next_follow_up_at: Option<DateTime<Utc>>,
    converted_to_client: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Creates a new inquiry in the `new` pipeline stage.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyContactName`] when the name is
    /// blank and [`LeadDomainError::InvalidEmail`] when the email lacks an
    /// `@`.
    pub fn new(new: NewInquiry, clock: &impl Clock) -> Result<Self, LeadDomainError> {
        let name = new.name.trim().to_owned();
        if name.is_empty() {
            return Err(LeadDomainError::EmptyContactName);
        }
        let email = new.email.trim().to_owned();
        if !email.contains('@') {
            return Err(LeadDomainError::InvalidEmail(email));
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: InquiryId::new(),
            name,
            email,
            phone: new.phone,
            message: new.message,
            status: LeadStatus::New,
            priority: new.priority,
            tags: new.tags,
            product_lines: new.product_lines,
            follow_ups: Vec::new(),
            last_contact_at: None,
            next_follow_up_at: None,
            converted_to_client: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs an inquiry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInquiryData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            status: data.status,
            priority: data.priority,
            tags: data.tags,
            product_lines: data.product_lines,
            follow_ups: data.follow_ups,
            last_contact_at: data.last_contact_at,
            next_follow_up_at: data.next_follow_up_at,
            converted_to_client: data.converted_to_client,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the inquiry identifier.
    #[must_use]
    pub const fn id(&self) -> InquiryId {
        self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> LeadStatus {
        self.status
    }

    /// Returns the urgency level.
    #[must_use]
    pub const fn priority(&self) -> LeadPriority {
        self.priority
    }

    /// Returns the creation-time tag snapshot.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Returns the requested product associations.
    #[must_use]
    pub fn product_lines(&self) -> &[ProductLine] {
        &self.product_lines
    }

    /// Returns the follow-up history, oldest first.
    #[must_use]
    pub fn follow_ups(&self) -> &[FollowUp] {
        &self.follow_ups
    }

    /// Returns when the lead was last contacted, if ever.
    #[must_use]
    pub const fn last_contact_at(&self) -> Option<DateTime<Utc>> {
        self.last_contact_at
    }

    /// Returns the next scheduled follow-up, if any.
    #[must_use]
    pub const fn next_follow_up_at(&self) -> Option<DateTime<Utc>> {
        self.next_follow_up_at
    }

    /// Reports whether the lead was converted to a client.
    #[must_use]
    pub const fn is_converted_to_client(&self) -> bool {
        self.converted_to_client
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the lead to another pipeline stage.
    pub fn transition_status(&mut self, status: LeadStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces the urgency level.
    pub fn set_priority(&mut self, priority: LeadPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces the message text.
    ///
    /// The tag snapshot is deliberately left alone.
    pub fn set_message(&mut self, message: Option<String>, clock: &impl Clock) {
        self.message = message;
        self.touch(clock);
    }

    /// Replaces the phone number.
    pub fn set_phone(&mut self, phone: Option<String>, clock: &impl Clock) {
        self.phone = phone;
        self.touch(clock);
    }

    /// Appends an outreach attempt to the history.
    ///
    /// The last-contact timestamp follows the attempt's recording time,
    /// and the next-follow-up reminder is updated when the attempt carries
    /// one.
    pub fn record_follow_up(&mut self, follow_up: FollowUp, clock: &impl Clock) {
        self.last_contact_at = Some(follow_up.recorded_at());
        if let Some(remind_at) = follow_up.remind_at() {
            self.next_follow_up_at = Some(remind_at);
        }
        self.follow_ups.push(follow_up);
        self.touch(clock);
    }

    /// Flags the lead as converted to a client.
    ///
    /// Conversion is one-way: repeated attempts are rejected so a lead can
    /// never fan out into duplicate client records.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::AlreadyConverted`] when the flag is
    /// already set.
    pub fn mark_converted(&mut self, clock: &impl Clock) -> Result<(), LeadDomainError> {
        if self.converted_to_client {
            return Err(LeadDomainError::AlreadyConverted(self.id));
        }
        self.converted_to_client = true;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
