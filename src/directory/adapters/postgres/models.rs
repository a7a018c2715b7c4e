//! Diesel row models for client persistence.

use super::schema::clients;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for client records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClientRow {
    /// Client identifier.
    pub id: uuid::Uuid,
    /// Client display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Source inquiry, if converted.
    pub source_inquiry_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for client records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clients)]
pub struct NewClientRow {
    /// Client identifier.
    pub id: uuid::Uuid,
    /// Client display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Source inquiry, if converted.
    pub source_inquiry_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
