//! Client directory for the Atelier admin system.
//!
//! Clients are the terminal form of a converted lead and can also be
//! entered directly by staff. The directory enforces at storage level that
//! a given inquiry converts into at most one client record.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
