//! Board task aggregate root and its column/priority scalar types.

use super::{BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError, TaskId};
use crate::directory::domain::ClientId;
use crate::lead::domain::InquiryId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fixed lifecycle column a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns all columns in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency scale for board tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Should be handled soon.
    High,
    /// Needs attention immediately.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameter object for creating a fresh task.
///
/// The column order is deliberately absent: the repository assigns it when
/// the task is appended to its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoardTask {
    /// Validated task title.
    pub title: TaskTitle,
    /// Target lifecycle column.
    pub status: TaskStatus,
    /// Urgency level.
    pub priority: TaskPriority,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee display name.
    pub assigned_to: Option<String>,
    /// Optional linked client.
    pub client_id: Option<ClientId>,
    /// Optional linked inquiry.
    pub inquiry_id: Option<InquiryId>,
    /// Free-form labels.
    pub tags: BTreeSet<String>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted column.
    pub status: TaskStatus,
    /// Persisted position within the column.
    pub order: u32,
    /// Persisted urgency level.
    pub priority: TaskPriority,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted assignee, if any.
    pub assigned_to: Option<String>,
    /// Persisted client link, if any.
    pub client_id: Option<ClientId>,
    /// Persisted inquiry link, if any.
    pub inquiry_id: Option<InquiryId>,
    /// Persisted labels.
    pub tags: BTreeSet<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Board task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTask {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    order: u32,
    priority: TaskPriority,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
    client_id: Option<ClientId>,
    inquiry_id: Option<InquiryId>,
    tags: BTreeSet<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BoardTask {
    /// Creates a new task at the provisional head of its column.
    ///
    /// The definitive order is assigned by the repository when the task is
    /// appended; until then the aggregate carries order zero.
    #[must_use]
    pub fn new(new: NewBoardTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: new.title,
            status: new.status,
            order: 0,
            priority: new.priority,
            description: new.description,
            due_date: new.due_date,
            assigned_to: new.assigned_to,
            client_id: new.client_id,
            inquiry_id: new.inquiry_id,
            tags: new.tags,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            order: data.order,
            priority: data.priority,
            description: data.description,
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            client_id: data.client_id,
            inquiry_id: data.inquiry_id,
            tags: data.tags,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the lifecycle column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the position within the column.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Returns the urgency level.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the linked client, if any.
    #[must_use]
    pub const fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }

    /// Returns the linked inquiry, if any.
    #[must_use]
    pub const fn inquiry_id(&self) -> Option<InquiryId> {
        self.inquiry_id
    }

    /// Returns the labels attached to this task.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
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

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the urgency level.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Replaces the due date.
    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Replaces the assignee.
    pub fn set_assigned_to(&mut self, assigned_to: Option<String>, clock: &impl Clock) {
        self.assigned_to = assigned_to;
        self.touch(clock);
    }

    /// Links this task to a client record.
    pub fn link_client(&mut self, client_id: ClientId, clock: &impl Clock) {
        self.client_id = Some(client_id);
        self.touch(clock);
    }

    /// Links this task to an inquiry record.
    pub fn link_inquiry(&mut self, inquiry_id: InquiryId, clock: &impl Clock) {
        self.inquiry_id = Some(inquiry_id);
        self.touch(clock);
    }

    /// Replaces the label set.
    pub fn set_tags(&mut self, tags: BTreeSet<String>, clock: &impl Clock) {
        self.tags = tags;
        self.touch(clock);
    }

    /// Places the task at a column position.
    ///
    /// Only repositories call this, while appending a fresh task or
    /// applying a move plan; column invariants are their responsibility.
    pub(crate) fn place_at(&mut self, status: TaskStatus, order: u32) {
        self.status = status;
        self.order = order;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
