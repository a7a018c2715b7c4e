//! Service layer for lead pipeline progression, follow-ups, and one-way
//! conversion into a client record.

use crate::directory::{
    domain::{Client, ClientDomainError, NewClient},
    ports::{ClientRepository, ClientRepositoryError},
};
use crate::lead::{
    domain::{FollowUp, FollowUpKind, Inquiry, InquiryId, LeadDomainError, LeadStatus},
    ports::{InquiryRepository, InquiryRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for recording an outreach attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUpRequest {
    kind: FollowUpKind,
    description: String,
    outcome: Option<String>,
    next_action: Option<String>,
    remind_at: Option<DateTime<Utc>>,
}

impl FollowUpRequest {
    /// Creates a request with the required channel and description.
    #[must_use]
    pub fn new(kind: FollowUpKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            outcome: None,
            next_action: None,
            remind_at: None,
        }
    }

    /// Sets the outcome of the attempt.
    #[must_use]
    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Sets the agreed next action.
    #[must_use]
    pub fn with_next_action(mut self, next_action: impl Into<String>) -> Self {
        self.next_action = Some(next_action.into());
        self
    }

    /// Schedules a reminder for the next touchpoint.
    #[must_use]
    pub fn with_reminder(mut self, remind_at: DateTime<Utc>) -> Self {
        self.remind_at = Some(remind_at);
        self
    }
}

/// Service-level errors for lead lifecycle operations.
#[derive(Debug, Error)]
pub enum LeadLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LeadDomainError),
    /// Inquiry persistence failed.
    #[error(transparent)]
    Repository(#[from] InquiryRepositoryError),
    /// Client record construction failed.
    #[error(transparent)]
    Client(#[from] ClientDomainError),
    /// Client persistence failed.
    #[error(transparent)]
    Directory(#[from] ClientRepositoryError),
}

/// Result type for lead lifecycle service operations.
pub type LeadLifecycleResult<T> = Result<T, LeadLifecycleError>;

/// Lead lifecycle orchestration service.
#[derive(Clone)]
pub struct LeadLifecycleService<R, D, C>
where
    R: InquiryRepository,
    D: ClientRepository,
    C: Clock + Send + Sync,
{
    inquiries: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<R, D, C> LeadLifecycleService<R, D, C>
where
    R: InquiryRepository,
    D: ClientRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(inquiries: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            inquiries,
            directory,
            clock,
        }
    }

    /// Appends an outreach attempt and returns the updated inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError`] when the inquiry does not exist or
    /// the follow-up description is blank.
    pub async fn record_follow_up(
        &self,
        inquiry_id: InquiryId,
        request: FollowUpRequest,
    ) -> LeadLifecycleResult<Inquiry> {
        let mut inquiry = self.load(inquiry_id).await?;

        let mut follow_up = FollowUp::new(request.kind, request.description, &*self.clock)?;
        if let Some(outcome) = request.outcome {
            follow_up = follow_up.with_outcome(outcome);
        }
        if let Some(next_action) = request.next_action {
            follow_up = follow_up.with_next_action(next_action);
        }
        if let Some(remind_at) = request.remind_at {
            follow_up = follow_up.with_reminder(remind_at);
        }

        inquiry.record_follow_up(follow_up, &*self.clock);
        self.inquiries.update(&inquiry).await?;
        Ok(inquiry)
    }

    /// Moves the lead to another pipeline stage and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError::Repository`] when the inquiry does
    /// not exist.
    pub async fn transition_status(
        &self,
        inquiry_id: InquiryId,
        status: LeadStatus,
    ) -> LeadLifecycleResult<Inquiry> {
        let mut inquiry = self.load(inquiry_id).await?;
        inquiry.transition_status(status, &*self.clock);
        self.inquiries.update(&inquiry).await?;
        Ok(inquiry)
    }

    /// Converts the lead into a client record.
    ///
    /// Conversion is one-way: the aggregate flag rejects a second attempt,
    /// and the directory's unique source-inquiry constraint backs that up
    /// at storage level.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError::Domain`] with
    /// [`LeadDomainError::AlreadyConverted`] on a repeated attempt, and
    /// [`LeadLifecycleError`] when the inquiry does not exist or
    /// persistence fails.
    pub async fn convert_to_client(&self, inquiry_id: InquiryId) -> LeadLifecycleResult<Client> {
        let mut inquiry = self.load(inquiry_id).await?;
        if inquiry.is_converted_to_client() {
            return Err(LeadDomainError::AlreadyConverted(inquiry_id).into());
        }

        let client = Client::new(
            NewClient {
                name: inquiry.name().to_owned(),
                email: inquiry.email().to_owned(),
                phone: inquiry.phone().map(ToOwned::to_owned),
                source_inquiry: Some(inquiry_id),
            },
            &*self.clock,
        )?;
        self.directory.insert(&client).await?;

        inquiry.mark_converted(&*self.clock)?;
        self.inquiries.update(&inquiry).await?;
        info!(inquiry = %inquiry_id, client = %client.id(), "lead converted to client");
        Ok(client)
    }

    /// Retrieves an inquiry by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError::Repository`] when the lookup fails.
    pub async fn find_inquiry(&self, id: InquiryId) -> LeadLifecycleResult<Option<Inquiry>> {
        Ok(self.inquiries.find_by_id(id).await?)
    }

    /// Returns every inquiry, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError::Repository`] when the listing fails.
    pub async fn list_inquiries(&self) -> LeadLifecycleResult<Vec<Inquiry>> {
        Ok(self.inquiries.list().await?)
    }

    /// Returns the inquiries in one pipeline stage, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LeadLifecycleError::Repository`] when the listing fails.
    pub async fn pipeline(&self, status: LeadStatus) -> LeadLifecycleResult<Vec<Inquiry>> {
        Ok(self.inquiries.list_by_status(status).await?)
    }

    async fn load(&self, id: InquiryId) -> LeadLifecycleResult<Inquiry> {
        Ok(self
            .inquiries
            .find_by_id(id)
            .await?
            .ok_or(InquiryRepositoryError::NotFound(id))?)
    }
}
