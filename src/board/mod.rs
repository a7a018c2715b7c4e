//! Ordered-column task store backing the Atelier kanban board.
//!
//! Tasks live in one of three fixed lifecycle columns (`todo`,
//! `in_progress`, `done`) and carry an integer order that is unique and
//! contiguous from zero within their column. Creating a task appends it to
//! its column; moving a task re-sequences every affected column inside a
//! single atomic repository operation so that no interleaving of concurrent
//! moves can leave duplicate or skipped order values. Deleting a task
//! leaves a gap that the next move through the column repairs.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the pure reorder planner in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
