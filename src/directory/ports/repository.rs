//! Repository port for client persistence.

use crate::directory::domain::{Client, ClientId};
use crate::lead::domain::InquiryId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for client repository operations.
pub type ClientRepositoryResult<T> = Result<T, ClientRepositoryError>;

/// Client persistence contract.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Stores a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientRepositoryError::DuplicateClient`] when the client
    /// ID already exists or
    /// [`ClientRepositoryError::DuplicateSourceInquiry`] when another
    /// client was already converted from the same inquiry. The latter is
    /// the storage-level backstop behind one-way lead conversion.
    async fn insert(&self, client: &Client) -> ClientRepositoryResult<()>;

    /// Persists changes to an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientRepositoryError::NotFound`] when the client does
    /// not exist.
    async fn update(&self, client: &Client) -> ClientRepositoryResult<()>;

    /// Finds a client by identifier.
    ///
    /// Returns `None` when the client does not exist.
    async fn find_by_id(&self, id: ClientId) -> ClientRepositoryResult<Option<Client>>;

    /// Finds the client converted from the given inquiry, if any.
    async fn find_by_source_inquiry(
        &self,
        inquiry_id: InquiryId,
    ) -> ClientRepositoryResult<Option<Client>>;

    /// Returns every client ordered by name.
    async fn list(&self) -> ClientRepositoryResult<Vec<Client>>;
}

/// Errors returned by client repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ClientRepositoryError {
    /// A client with the same identifier already exists.
    #[error("duplicate client identifier: {0}")]
    DuplicateClient(ClientId),

    /// A client converted from the same inquiry already exists.
    #[error("inquiry {0} was already converted to a client")]
    DuplicateSourceInquiry(InquiryId),

    /// The client was not found.
    #[error("client not found: {0}")]
    NotFound(ClientId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClientRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for ClientRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
