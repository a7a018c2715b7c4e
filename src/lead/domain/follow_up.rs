//! Follow-up records appended to a lead's outreach history.

use super::{FollowUpId, LeadDomainError, ParseFollowUpKindError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel used for an outreach attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpKind {
    /// Phone call.
    Call,
    /// Email message.
    Email,
    /// In-person or video meeting.
    Meeting,
    /// WhatsApp message.
    Whatsapp,
}

impl FollowUpKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl TryFrom<&str> for FollowUpKind {
    type Error = ParseFollowUpKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "meeting" => Ok(Self::Meeting),
            "whatsapp" => Ok(Self::Whatsapp),
            _ => Err(ParseFollowUpKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for FollowUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outreach attempt against a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    id: FollowUpId,
    kind: FollowUpKind,
    description: String,
    outcome: Option<String>,
    next_action: Option<String>,
    remind_at: Option<DateTime<Utc>>,
    recorded_at: DateTime<Utc>,
}

impl FollowUp {
    /// Creates a follow-up record stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyFollowUpDescription`] when the
    /// description is blank.
    pub fn new(
        kind: FollowUpKind,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, LeadDomainError> {
        let raw = description.into();
        let trimmed = raw.trim().to_owned();
        if trimmed.is_empty() {
            return Err(LeadDomainError::EmptyFollowUpDescription);
        }
        Ok(Self {
            id: FollowUpId::new(),
            kind,
            description: trimmed,
            outcome: None,
            next_action: None,
            remind_at: None,
            recorded_at: clock.utc(),
        })
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

    /// Returns the follow-up identifier.
    #[must_use]
    pub const fn id(&self) -> FollowUpId {
        self.id
    }

    /// Returns the outreach channel.
    #[must_use]
    pub const fn kind(&self) -> FollowUpKind {
        self.kind
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the outcome, if recorded.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    /// Returns the agreed next action, if any.
    #[must_use]
    pub fn next_action(&self) -> Option<&str> {
        self.next_action.as_deref()
    }

    /// Returns the scheduled reminder, if any.
    #[must_use]
    pub const fn remind_at(&self) -> Option<DateTime<Utc>> {
        self.remind_at
    }

    /// Returns when the attempt was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
