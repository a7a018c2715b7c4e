//! Repository port for inquiry persistence.

use crate::lead::domain::{Inquiry, InquiryId, LeadStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for inquiry repository operations.
pub type InquiryRepositoryResult<T> = Result<T, InquiryRepositoryError>;

/// Inquiry persistence contract.
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Stores a new inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryRepositoryError::DuplicateInquiry`] when the
    /// inquiry ID already exists.
    async fn insert(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()>;

    /// Persists changes to an existing inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryRepositoryError::NotFound`] when the inquiry does
    /// not exist.
    async fn update(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()>;

    /// Finds an inquiry by identifier.
    ///
    /// Returns `None` when the inquiry does not exist.
    async fn find_by_id(&self, id: InquiryId) -> InquiryRepositoryResult<Option<Inquiry>>;

    /// Returns every inquiry, newest first.
    async fn list(&self) -> InquiryRepositoryResult<Vec<Inquiry>>;

    /// Returns the inquiries in one pipeline stage, newest first.
    async fn list_by_status(&self, status: LeadStatus) -> InquiryRepositoryResult<Vec<Inquiry>>;
}

/// Errors returned by inquiry repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InquiryRepositoryError {
    /// An inquiry with the same identifier already exists.
    #[error("duplicate inquiry identifier: {0}")]
    DuplicateInquiry(InquiryId),

    /// The inquiry was not found.
    #[error("inquiry not found: {0}")]
    NotFound(InquiryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InquiryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for InquiryRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
