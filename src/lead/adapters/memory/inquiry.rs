//! Thread-safe in-memory inquiry repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::lead::{
    domain::{Inquiry, InquiryId, LeadStatus},
    ports::{InquiryRepository, InquiryRepositoryError, InquiryRepositoryResult},
};

/// Thread-safe in-memory inquiry repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInquiryRepository {
    state: Arc<RwLock<InMemoryInquiryState>>,
}

#[derive(Debug, Default)]
struct InMemoryInquiryState {
    inquiries: HashMap<InquiryId, Inquiry>,
}

impl InMemoryInquiryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> InquiryRepositoryError {
    InquiryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Sorts newest first, with the identifier as a stable tiebreak.
fn sorted_newest_first(mut inquiries: Vec<Inquiry>) -> Vec<Inquiry> {
    inquiries.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    inquiries
}

#[async_trait]
impl InquiryRepository for InMemoryInquiryRepository {
    async fn insert(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.inquiries.contains_key(&inquiry.id()) {
            return Err(InquiryRepositoryError::DuplicateInquiry(inquiry.id()));
        }
        state.inquiries.insert(inquiry.id(), inquiry.clone());
        Ok(())
    }

    async fn update(&self, inquiry: &Inquiry) -> InquiryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.inquiries.contains_key(&inquiry.id()) {
            return Err(InquiryRepositoryError::NotFound(inquiry.id()));
        }
        state.inquiries.insert(inquiry.id(), inquiry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: InquiryId) -> InquiryRepositoryResult<Option<Inquiry>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.inquiries.get(&id).cloned())
    }

    async fn list(&self) -> InquiryRepositoryResult<Vec<Inquiry>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(sorted_newest_first(
            state.inquiries.values().cloned().collect(),
        ))
    }

    async fn list_by_status(&self, status: LeadStatus) -> InquiryRepositoryResult<Vec<Inquiry>> {
        let state = self.state.read().map_err(lock_error)?;
        let matching: Vec<Inquiry> = state
            .inquiries
            .values()
            .filter(|inquiry| inquiry.status() == status)
            .cloned()
            .collect();
        Ok(sorted_newest_first(matching))
    }
}
