//! `PostgreSQL` adapters for product persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CatalogPgPool, PostgresProductRepository};
