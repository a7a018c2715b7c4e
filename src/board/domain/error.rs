//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or re-planning board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The moved task is not a member of its declared source column.
    #[error("task {0} is not present in its source column")]
    MovedTaskAbsent(TaskId),

    /// The moved task already appears in the target column of a
    /// cross-column move.
    #[error("task {0} already belongs to the target column")]
    MovedTaskAlreadyInTarget(TaskId),

    /// A column sequence contains the same task more than once.
    #[error("task {0} appears more than once in a column sequence")]
    DuplicateColumnMember(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
