//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing client domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientDomainError {
    /// The client name is empty after trimming.
    #[error("client name must not be empty")]
    EmptyName,

    /// The email address is not plausibly formed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
