//! `PostgreSQL` adapters for inquiry persistence.

mod models;
mod repository;
mod schema;

pub use repository::{LeadPgPool, PostgresInquiryRepository};
