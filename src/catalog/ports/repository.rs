//! Repository port for product persistence and name search.

use crate::catalog::domain::{Product, ProductId, ProductName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for product repository operations.
pub type ProductRepositoryResult<T> = Result<T, ProductRepositoryError>;

/// Product persistence contract.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::DuplicateProduct`] when the
    /// product ID already exists or
    /// [`ProductRepositoryError::DuplicateName`] when another product
    /// carries the same name.
    async fn insert(&self, product: &Product) -> ProductRepositoryResult<()>;

    /// Persists changes to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductRepositoryError::NotFound`] when the product does
    /// not exist.
    async fn update(&self, product: &Product) -> ProductRepositoryResult<()>;

    /// Finds a product by identifier.
    ///
    /// Returns `None` when the product does not exist.
    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>>;

    /// Returns every product ordered by name.
    async fn list(&self) -> ProductRepositoryResult<Vec<Product>>;

    /// Returns active products whose name contains `fragment`, ignoring
    /// case, ordered by name.
    ///
    /// An empty result is not an error; lead intake treats it as an
    /// unlinkable request.
    async fn search_by_name(&self, fragment: &str) -> ProductRepositoryResult<Vec<Product>>;
}

/// Errors returned by product repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProductRepositoryError {
    /// A product with the same identifier already exists.
    #[error("duplicate product identifier: {0}")]
    DuplicateProduct(ProductId),

    /// A product with the same name already exists.
    #[error("duplicate product name: {0}")]
    DuplicateName(ProductName),

    /// The product was not found.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProductRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for ProductRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
