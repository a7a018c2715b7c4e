//! Diesel row models for board task persistence.

use super::schema::board_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for board task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Lifecycle column.
    pub status: String,
    /// Position within the column.
    pub position: i32,
    /// Urgency level.
    pub priority: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Optional linked client.
    pub client_id: Option<uuid::Uuid>,
    /// Optional linked inquiry.
    pub inquiry_id: Option<uuid::Uuid>,
    /// Label set as a JSON array.
    pub tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for board task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_tasks)]
pub struct NewBoardTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Lifecycle column.
    pub status: String,
    /// Position within the column.
    pub position: i32,
    /// Urgency level.
    pub priority: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Optional linked client.
    pub client_id: Option<uuid::Uuid>,
    /// Optional linked inquiry.
    pub inquiry_id: Option<uuid::Uuid>,
    /// Label set as a JSON array.
    pub tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
