//! Orchestration services for the product catalog.

mod catalog;

pub use catalog::{CatalogService, CatalogServiceError, CatalogServiceResult, CreateProductRequest};
