//! Atelier: CRM core for a promotional-products business.
//!
//! This crate provides the domain logic behind the Atelier admin system:
//! an ordered kanban task board, inquiry (lead) intake with rule-based
//! tagging, a product catalog, a client directory fed by lead conversion,
//! and a bounded read-through cache.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Ordered-column task store backing the kanban view
//! - [`lead`]: Inquiry aggregate, tagging rules, follow-ups, conversion
//! - [`catalog`]: Product records and best-effort name resolution
//! - [`directory`]: Client records created from converted leads
//! - [`cache`]: TTL + LRU cache with an injected clock

pub mod board;
pub mod cache;
pub mod catalog;
pub mod directory;
pub mod lead;

#[cfg(test)]
mod test_support;
