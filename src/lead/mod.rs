//! Lead management for the Atelier admin system.
//!
//! An inquiry is a prospective customer contact captured from the public
//! site or entered by staff. At creation time a rule-based tagging engine
//! derives a segmentation tag set from the message text and structured
//! fields, and requested product names are linked to catalog records on a
//! best-effort basis. Leads then move through a pipeline of statuses,
//! accumulate follow-up records, and can be converted exactly once into a
//! client.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the tagging rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
