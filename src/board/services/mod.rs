//! Orchestration services for the ordered-column task store.

mod board;

pub use board::{BoardService, BoardServiceError, BoardServiceResult, CreateTaskRequest, TaskChanges};
