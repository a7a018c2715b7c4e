//! Thread-safe in-memory product repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{Product, ProductId},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};

/// Thread-safe in-memory product repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryProductState>>,
}

#[derive(Debug, Default)]
struct InMemoryProductState {
    products: HashMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ProductRepositoryError {
    ProductRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn sorted_by_name(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
    products
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> ProductRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.products.contains_key(&product.id()) {
            return Err(ProductRepositoryError::DuplicateProduct(product.id()));
        }
        let name_taken = state
            .products
            .values()
            .any(|existing| existing.name() == product.name());
        if name_taken {
            return Err(ProductRepositoryError::DuplicateName(product.name().clone()));
        }
        state.products.insert(product.id(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> ProductRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.products.contains_key(&product.id()) {
            return Err(ProductRepositoryError::NotFound(product.id()));
        }
        state.products.insert(product.id(), product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(sorted_by_name(state.products.values().cloned().collect()))
    }

    async fn search_by_name(&self, fragment: &str) -> ProductRepositoryResult<Vec<Product>> {
        let state = self.state.read().map_err(lock_error)?;
        let matches: Vec<Product> = state
            .products
            .values()
            .filter(|product| product.is_active() && product.name().matches_fragment(fragment))
            .cloned()
            .collect();
        Ok(sorted_by_name(matches))
    }
}
