//! Error types for catalog domain validation.

use thiserror::Error;

/// Errors returned while constructing catalog domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The product name is empty after trimming.
    #[error("product name must not be empty")]
    EmptyName,

    /// The unit price is negative.
    #[error("unit price must not be negative, got {0}")]
    NegativePrice(i64),
}
