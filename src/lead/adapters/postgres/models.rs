//! Diesel row models for inquiry persistence.

use super::schema::inquiries;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for inquiry records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inquiries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InquiryRow {
    /// Inquiry identifier.
    pub id: uuid::Uuid,
    /// Contact display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional free-form message.
    pub message: Option<String>,
    /// Pipeline status.
    pub status: String,
    /// Urgency level.
    pub priority: String,
    /// Tag snapshot as a JSON array.
    pub tags: Value,
    /// Product associations as a JSON array.
    pub product_lines: Value,
    /// Follow-up history as a JSON array.
    pub follow_ups: Value,
    /// Last contact timestamp, if any.
    pub last_contact_at: Option<DateTime<Utc>>,
    /// Next follow-up reminder, if any.
    pub next_follow_up_at: Option<DateTime<Utc>>,
    /// One-way conversion flag.
    pub converted_to_client: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for inquiry records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = inquiries)]
pub struct NewInquiryRow {
    /// Inquiry identifier.
    pub id: uuid::Uuid,
    /// Contact display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional free-form message.
    pub message: Option<String>,
    /// Pipeline status.
    pub status: String,
    /// Urgency level.
    pub priority: String,
    /// Tag snapshot as a JSON array.
    pub tags: Value,
    /// Product associations as a JSON array.
    pub product_lines: Value,
    /// Follow-up history as a JSON array.
    pub follow_ups: Value,
    /// Last contact timestamp, if any.
    pub last_contact_at: Option<DateTime<Utc>>,
    /// Next follow-up reminder, if any.
    pub next_follow_up_at: Option<DateTime<Utc>>,
    /// One-way conversion flag.
    pub converted_to_client: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
