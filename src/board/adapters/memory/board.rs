//! Thread-safe in-memory board repository.
//!
//! Ordering mutations run under one write lock, which gives the same
//! atomicity guarantee the `PostgreSQL` adapter gets from a transaction.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardTask, MoveRequest, TaskId, TaskStatus, plan_move},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: HashMap<TaskId, BoardTask>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Returns one column's task identifiers sorted by current order.
fn column_sequence(state: &InMemoryBoardState, status: TaskStatus) -> Vec<TaskId> {
    let mut members: Vec<&BoardTask> = state
        .tasks
        .values()
        .filter(|task| task.status() == status)
        .collect();
    members.sort_by_key(|task| task.order());
    members.iter().map(|task| task.id()).collect()
}

fn column_len(state: &InMemoryBoardState, status: TaskStatus) -> usize {
    state
        .tasks
        .values()
        .filter(|task| task.status() == status)
        .count()
}

fn sorted_board(state: &InMemoryBoardState) -> Vec<BoardTask> {
    let mut board: Vec<BoardTask> = state.tasks.values().cloned().collect();
    board.sort_by_key(|task| (task.status(), task.order()));
    board
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn append(&self, task: &BoardTask) -> BoardRepositoryResult<BoardTask> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::DuplicateTask(task.id()));
        }

        let position = u32::try_from(column_len(&state, task.status()))
            .map_err(BoardRepositoryError::persistence)?;
        let mut stored = task.clone();
        stored.place_at(task.status(), position);
        state.tasks.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &BoardTask) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let placement = state
            .tasks
            .get(&task.id())
            .map(|stored| (stored.status(), stored.order()))
            .ok_or(BoardRepositoryError::NotFound(task.id()))?;

        // Placement is owned by append/move_task; keep the stored one.
        let mut stored = task.clone();
        stored.place_at(placement.0, placement.1);
        state.tasks.insert(stored.id(), stored);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<BoardTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(BoardRepositoryError::NotFound(id))
    }

    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<BoardTask>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut column: Vec<BoardTask> = state
            .tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect();
        column.sort_by_key(BoardTask::order);
        Ok(column)
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<BoardTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(sorted_board(&state))
    }

    async fn move_task(&self, request: MoveRequest) -> BoardRepositoryResult<Vec<BoardTask>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let current_status = state
            .tasks
            .get(&request.task_id)
            .map(BoardTask::status)
            .ok_or(BoardRepositoryError::NotFound(request.task_id))?;

        let source = column_sequence(&state, current_status);
        let target = column_sequence(&state, request.new_status);
        let plan = plan_move(request, current_status, &source, &target)?;

        for assignment in plan {
            if let Some(task) = state.tasks.get_mut(&assignment.task_id) {
                task.place_at(assignment.status, assignment.order);
            }
        }
        Ok(sorted_board(&state))
    }
}
