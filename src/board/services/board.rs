//! Service layer for board task creation, updates, and column moves.

use crate::board::{
    domain::{
        BoardDomainError, BoardTask, MoveRequest, NewBoardTask, TaskId, TaskPriority, TaskStatus,
        TaskTitle,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::directory::domain::ClientId;
use crate::lead::domain::InquiryId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a board task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    status: TaskStatus,
    priority: TaskPriority,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
    client_id: Option<ClientId>,
    inquiry_id: Option<InquiryId>,
    tags: BTreeSet<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title; the task lands in the
    /// `todo` column with medium priority unless overridden.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            description: None,
            due_date: None,
            assigned_to: None,
            client_id: None,
            inquiry_id: None,
            tags: BTreeSet::new(),
        }
    }

    /// Sets the target column.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the urgency level.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Links the task to a client record.
    #[must_use]
    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Links the task to an inquiry record.
    #[must_use]
    pub fn with_inquiry(mut self, inquiry_id: InquiryId) -> Self {
        self.inquiry_id = Some(inquiry_id);
        self
    }

    /// Sets the label set.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Field changes applied by [`BoardService::update_task`].
///
/// An outer `None` leaves the field unchanged; for clearable fields the
/// inner `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement urgency level.
    pub priority: Option<TaskPriority>,
    /// Replacement or cleared description.
    pub description: Option<Option<String>>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement or cleared assignee.
    pub assigned_to: Option<Option<String>>,
    /// Replacement label set.
    pub tags: Option<BTreeSet<String>>,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task at the end of its column and returns it with its
    /// assigned order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the title is invalid or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<BoardTask> {
        let title = TaskTitle::new(request.title)?;
        let task = BoardTask::new(
            NewBoardTask {
                title,
                status: request.status,
                priority: request.priority,
                description: request.description,
                due_date: request.due_date,
                assigned_to: request.assigned_to,
                client_id: request.client_id,
                inquiry_id: request.inquiry_id,
                tags: request.tags,
            },
            &*self.clock,
        );
        Ok(self.repository.append(&task).await?)
    }

    /// Moves a task to a column position and returns the full board sorted
    /// by (status, order), ready for a view refresh.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the task does not
    /// exist or the move cannot be applied.
    pub async fn move_task(&self, request: MoveRequest) -> BoardServiceResult<Vec<BoardTask>> {
        Ok(self.repository.move_task(request).await?)
    }

    /// Applies field changes to a task and returns the updated aggregate.
    ///
    /// Column placement is untouched; use [`BoardService::move_task`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the task does not exist or a
    /// replacement title is invalid.
    pub async fn update_task(
        &self,
        id: TaskId,
        changes: TaskChanges,
    ) -> BoardServiceResult<BoardTask> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BoardRepositoryError::NotFound(id))?;

        if let Some(title) = changes.title {
            task.rename(TaskTitle::new(title)?, &*self.clock);
        }
        if let Some(priority) = changes.priority {
            task.set_priority(priority, &*self.clock);
        }
        if let Some(description) = changes.description {
            task.set_description(description, &*self.clock);
        }
        if let Some(due_date) = changes.due_date {
            task.set_due_date(due_date, &*self.clock);
        }
        if let Some(assigned_to) = changes.assigned_to {
            task.set_assigned_to(assigned_to, &*self.clock);
        }
        if let Some(tags) = changes.tags {
            task.set_tags(tags, &*self.clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task, leaving its column gap for the next move to repair.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the task does not
    /// exist.
    pub async fn delete_task(&self, id: TaskId) -> BoardServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> BoardServiceResult<Option<BoardTask>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns one column sorted by order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the listing fails.
    pub async fn column(&self, status: TaskStatus) -> BoardServiceResult<Vec<BoardTask>> {
        Ok(self.repository.list_by_status(status).await?)
    }

    /// Returns the full board sorted by (status, order).
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the listing fails.
    pub async fn board(&self) -> BoardServiceResult<Vec<BoardTask>> {
        Ok(self.repository.list_all().await?)
    }
}
