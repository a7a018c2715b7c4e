//! Pure planning logic for column moves.
//!
//! A move is planned against snapshots of the affected column sequences and
//! produces the complete set of order assignments that make both columns
//! contiguous from zero again. Planning never touches storage; repositories
//! apply a plan inside a single atomic write so concurrent moves cannot
//! interleave partial renumberings.

use super::{BoardDomainError, TaskId, TaskStatus};
use std::collections::BTreeSet;

/// Caller intent for a column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Task being moved.
    pub task_id: TaskId,
    /// Column the task should end up in.
    pub new_status: TaskStatus,
    /// Requested position within the target column.
    ///
    /// Values past the end of the column are clamped to an append.
    pub new_order: u32,
}

/// One task's final column placement after a move settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssignment {
    /// Task receiving the placement.
    pub task_id: TaskId,
    /// Column the task belongs to after the move.
    pub status: TaskStatus,
    /// Contiguous position within that column.
    pub order: u32,
}

/// Plans the order assignments for moving one task.
///
/// `source` is the sequence of the task's current column sorted by order
/// and must contain the moved task; `target` is the sequence of the
/// requested column, ignored when the move stays within one column. Both
/// sequences may carry gaps left by deletions; the plan renumbers every
/// member of the affected columns contiguously from zero, which both makes
/// room at the requested position and repairs any gaps.
///
/// Moving a task onto the position it already occupies in a contiguous
/// column yields assignments identical to the current state, so applying
/// the plan changes nothing.
///
/// # Errors
///
/// Returns [`BoardDomainError::MovedTaskAbsent`] when the task is missing
/// from `source`, [`BoardDomainError::MovedTaskAlreadyInTarget`] when a
/// cross-column move finds the task already in `target`, and
/// [`BoardDomainError::DuplicateColumnMember`] when either sequence lists
/// a task twice.
pub fn plan_move(
    request: MoveRequest,
    current_status: TaskStatus,
    source: &[TaskId],
    target: &[TaskId],
) -> Result<Vec<OrderAssignment>, BoardDomainError> {
    ensure_unique(source)?;
    if !source.contains(&request.task_id) {
        return Err(BoardDomainError::MovedTaskAbsent(request.task_id));
    }

    let remaining: Vec<TaskId> = source
        .iter()
        .copied()
        .filter(|id| *id != request.task_id)
        .collect();

    if current_status == request.new_status {
        let placed = insert_at(&remaining, request.task_id, request.new_order);
        return Ok(assignments_for(&placed, request.new_status));
    }

    ensure_unique(target)?;
    if target.contains(&request.task_id) {
        return Err(BoardDomainError::MovedTaskAlreadyInTarget(request.task_id));
    }

    let placed = insert_at(target, request.task_id, request.new_order);
    let mut assignments = assignments_for(&remaining, current_status);
    assignments.extend(assignments_for(&placed, request.new_status));
    Ok(assignments)
}

/// Returns `sequence` with `task_id` inserted at `position`, clamped to an
/// append when the position is past the end.
fn insert_at(sequence: &[TaskId], task_id: TaskId, position: u32) -> Vec<TaskId> {
    let requested = usize::try_from(position).unwrap_or(usize::MAX);
    let index = requested.min(sequence.len());
    let mut placed = Vec::with_capacity(sequence.len() + 1);
    placed.extend_from_slice(sequence.get(..index).unwrap_or(sequence));
    placed.push(task_id);
    placed.extend_from_slice(sequence.get(index..).unwrap_or_default());
    placed
}

/// Numbers a column sequence contiguously from zero.
fn assignments_for(sequence: &[TaskId], status: TaskStatus) -> Vec<OrderAssignment> {
    (0u32..)
        .zip(sequence.iter().copied())
        .map(|(order, task_id)| OrderAssignment {
            task_id,
            status,
            order,
        })
        .collect()
}

/// Rejects sequences that list a task more than once.
fn ensure_unique(sequence: &[TaskId]) -> Result<(), BoardDomainError> {
    let mut seen = BTreeSet::new();
    for id in sequence {
        if !seen.insert(*id) {
            return Err(BoardDomainError::DuplicateColumnMember(*id));
        }
    }
    Ok(())
}
