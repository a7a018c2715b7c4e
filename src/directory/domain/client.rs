//! Client aggregate root.

use super::{ClientDomainError, ClientId};
use crate::lead::domain::InquiryId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for creating a fresh client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    /// Client display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Inquiry this client was converted from, if any.
    pub source_inquiry: Option<InquiryId>,
}

/// Parameter object for reconstructing a persisted client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedClientData {
    /// Persisted client identifier.
    pub id: ClientId,
    /// Persisted name.
    pub name: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted phone number, if any.
    pub phone: Option<String>,
    /// Persisted source inquiry, if any.
    pub source_inquiry: Option<InquiryId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Client aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    email: String,
    phone: Option<String>,
    source_inquiry: Option<InquiryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new client record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDomainError::EmptyName`] when the name is blank and
    /// [`ClientDomainError::InvalidEmail`] when the email lacks an `@`.
    pub fn new(new: NewClient, clock: &impl Clock) -> Result<Self, ClientDomainError> {
        let name = new.name.trim().to_owned();
        if name.is_empty() {
            return Err(ClientDomainError::EmptyName);
        }
        let email = new.email.trim().to_owned();
        if !email.contains('@') {
            return Err(ClientDomainError::InvalidEmail(email));
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: ClientId::new(),
            name,
            email,
            phone: new.phone,
            source_inquiry: new.source_inquiry,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a client from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedClientData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            source_inquiry: data.source_inquiry,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the client identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the display name.
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

    /// Returns the inquiry this client was converted from, if any.
    #[must_use]
    pub const fn source_inquiry(&self) -> Option<InquiryId> {
        self.source_inquiry
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

    /// Replaces the contact details.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDomainError::InvalidEmail`] when the email lacks an
    /// `@`.
    pub fn update_contact(
        &mut self,
        email: String,
        phone: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), ClientDomainError> {
        let trimmed = email.trim().to_owned();
        if !trimmed.contains('@') {
            return Err(ClientDomainError::InvalidEmail(trimmed));
        }
        self.email = trimmed;
        self.phone = phone;
        self.updated_at = clock.utc();
        Ok(())
    }
}
