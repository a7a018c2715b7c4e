//! Repository port for board task persistence and atomic column moves.

use crate::board::domain::{BoardDomainError, BoardTask, MoveRequest, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board task persistence contract.
///
/// Every ordering mutation is atomic: `append` assigns the next position of
/// the target column and `move_task` applies a full renumbering plan, each
/// inside one storage-level critical section. Nothing else writes the
/// placement columns, so the contiguity invariant cannot be broken by
/// interleaved calls.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new task at the end of its column and returns the stored
    /// aggregate with its assigned order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn append(&self, task: &BoardTask) -> BoardRepositoryResult<BoardTask>;

    /// Persists field changes to an existing task.
    ///
    /// The placement columns (`status`, `order`) are never written by this
    /// operation; moves go through [`BoardRepository::move_task`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &BoardTask) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<BoardTask>>;

    /// Deletes a task without renumbering its column siblings.
    ///
    /// The resulting gap is tolerated and repaired by the next move that
    /// touches the column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()>;

    /// Returns the tasks of one column sorted by order.
    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<BoardTask>>;

    /// Returns every task sorted by (status, order).
    async fn list_all(&self) -> BoardRepositoryResult<Vec<BoardTask>>;

    /// Moves a task to a column position, renumbering both affected
    /// columns in one atomic operation, and returns the full board sorted
    /// by (status, order).
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the task does not
    /// exist and [`BoardRepositoryError::InvalidColumnState`] when the
    /// stored column data cannot be planned against.
    async fn move_task(&self, request: MoveRequest) -> BoardRepositoryResult<Vec<BoardTask>>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Stored column data violated a planning precondition.
    #[error("column state invalid: {0}")]
    InvalidColumnState(#[from] BoardDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for BoardRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        // Unique violations carry no identifiers, so adapters pre-check and
        // map them to the semantic variants; everything else is opaque.
        Self::persistence(err)
    }
}
