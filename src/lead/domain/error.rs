//! Error types for lead domain validation and parsing.

use super::InquiryId;
use thiserror::Error;

/// Errors returned while constructing or mutating lead domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeadDomainError {
    /// The contact name is empty after trimming.
    #[error("contact name must not be empty")]
    EmptyContactName,

    /// The email address is not plausibly formed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A product line requested zero units.
    #[error("requested quantity for '{0}' must be at least one")]
    ZeroQuantity(String),

    /// A product line has no requested name.
    #[error("requested product name must not be empty")]
    EmptyProductName,

    /// A follow-up was recorded without a description.
    #[error("follow-up description must not be empty")]
    EmptyFollowUpDescription,

    /// The inquiry was already converted to a client.
    #[error("inquiry {0} was already converted to a client")]
    AlreadyConverted(InquiryId),
}

/// Error returned while parsing lead statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead status: {0}")]
pub struct ParseLeadStatusError(pub String);

/// Error returned while parsing lead priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead priority: {0}")]
pub struct ParseLeadPriorityError(pub String);

/// Error returned while parsing follow-up kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown follow-up kind: {0}")]
pub struct ParseFollowUpKindError(pub String);
