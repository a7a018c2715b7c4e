//! Domain model for the product catalog.

mod error;
mod ids;
mod product;

pub use error::CatalogDomainError;
pub use ids::ProductId;
pub use product::{NewProduct, PersistedProductData, Product, ProductName};
