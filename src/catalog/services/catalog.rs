//! Service layer for product creation and lookup.

use crate::catalog::{
    domain::{CatalogDomainError, NewProduct, Product, ProductId, ProductName},
    ports::{ProductRepository, ProductRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductRequest {
    name: String,
    description: Option<String>,
    unit_price_cents: i64,
}

impl CreateProductRequest {
    /// Creates a request with the required name and price.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price_cents: i64) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit_price_cents,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProductRepositoryError),
}

/// Result type for catalog service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Catalog orchestration service.
#[derive(Clone)]
pub struct CatalogService<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CatalogService<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> CatalogServiceResult<Product> {
        let name = ProductName::new(request.name)?;
        let product = Product::new(
            NewProduct {
                name,
                description: request.description,
                unit_price_cents: request.unit_price_cents,
            },
            &*self.clock,
        )?;
        self.repository.insert(&product).await?;
        Ok(product)
    }

    /// Retrieves a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the lookup fails.
    pub async fn find_product(&self, id: ProductId) -> CatalogServiceResult<Option<Product>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns the full catalog ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the listing fails.
    pub async fn list_products(&self) -> CatalogServiceResult<Vec<Product>> {
        Ok(self.repository.list().await?)
    }

    /// Returns active products matching a name fragment, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the search fails.
    pub async fn search(&self, fragment: &str) -> CatalogServiceResult<Vec<Product>> {
        Ok(self.repository.search_by_name(fragment).await?)
    }

    /// Takes a product off the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] when the product does
    /// not exist.
    pub async fn retire_product(&self, id: ProductId) -> CatalogServiceResult<Product> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductRepositoryError::NotFound(id))?;
        product.deactivate(&*self.clock);
        self.repository.update(&product).await?;
        Ok(product)
    }
}
