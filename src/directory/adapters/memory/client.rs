//! Thread-safe in-memory client repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Client, ClientId},
    ports::{ClientRepository, ClientRepositoryError, ClientRepositoryResult},
};
use crate::lead::domain::InquiryId;

/// Thread-safe in-memory client repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientRepository {
    state: Arc<RwLock<InMemoryClientState>>,
}

#[derive(Debug, Default)]
struct InMemoryClientState {
    clients: HashMap<ClientId, Client>,
    source_index: HashMap<InquiryId, ClientId>,
}

impl InMemoryClientRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ClientRepositoryError {
    ClientRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert(&self, client: &Client) -> ClientRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.clients.contains_key(&client.id()) {
            return Err(ClientRepositoryError::DuplicateClient(client.id()));
        }
        if let Some(inquiry_id) = client.source_inquiry() {
            if state.source_index.contains_key(&inquiry_id) {
                return Err(ClientRepositoryError::DuplicateSourceInquiry(inquiry_id));
            }
            state.source_index.insert(inquiry_id, client.id());
        }
        state.clients.insert(client.id(), client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> ClientRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.clients.contains_key(&client.id()) {
            return Err(ClientRepositoryError::NotFound(client.id()));
        }
        state.clients.insert(client.id(), client.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ClientId) -> ClientRepositoryResult<Option<Client>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.clients.get(&id).cloned())
    }

    async fn find_by_source_inquiry(
        &self,
        inquiry_id: InquiryId,
    ) -> ClientRepositoryResult<Option<Client>> {
        let state = self.state.read().map_err(lock_error)?;
        let client = state
            .source_index
            .get(&inquiry_id)
            .and_then(|client_id| state.clients.get(client_id))
            .cloned();
        Ok(client)
    }

    async fn list(&self) -> ClientRepositoryResult<Vec<Client>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut clients: Vec<Client> = state.clients.values().cloned().collect();
        clients.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(clients)
    }
}
