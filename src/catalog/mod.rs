//! Product catalog for the Atelier admin system.
//!
//! Products are plain records with a validated name and a price in cents.
//! The catalog's one behavioural duty is case-insensitive substring name
//! search, which lead intake uses to link requested product names to
//! persisted records on a best-effort basis.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
