//! Service orchestration tests for the catalog over the in-memory adapter.

use std::sync::Arc;

use crate::catalog::{
    adapters::memory::InMemoryProductRepository,
    domain::Product,
    ports::ProductRepositoryError,
    services::{CatalogService, CatalogServiceError, CreateProductRequest},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = CatalogService<InMemoryProductRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    CatalogService::new(
        Arc::new(InMemoryProductRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_and_search_by_case_insensitive_fragment(service: TestService) {
    service
        .create_product(CreateProductRequest::new("Vestido rojo", 8900))
        .await
        .expect("creation should succeed");
    service
        .create_product(CreateProductRequest::new("Vestido largo", 9900))
        .await
        .expect("creation should succeed");
    service
        .create_product(CreateProductRequest::new("Blazer gris", 12900))
        .await
        .expect("creation should succeed");

    let matches = service.search("VESTIDO").await.expect("search should succeed");
    let names: Vec<&str> = matches
        .iter()
        .map(|product| product.name().as_str())
        .collect();
    assert_eq!(names, vec!["Vestido largo", "Vestido rojo"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_name_is_rejected(service: TestService) {
    service
        .create_product(CreateProductRequest::new("Camisa lino", 5500))
        .await
        .expect("creation should succeed");

    let result = service
        .create_product(CreateProductRequest::new("Camisa lino", 6000))
        .await;

    assert!(matches!(
        result,
        Err(CatalogServiceError::Repository(
            ProductRepositoryError::DuplicateName(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retired_products_are_excluded_from_search(service: TestService) {
    let product = service
        .create_product(CreateProductRequest::new("Falda plisada", 4500))
        .await
        .expect("creation should succeed");

    service
        .retire_product(product.id())
        .await
        .expect("retirement should succeed");

    let matches = service.search("falda").await.expect("search should succeed");
    assert!(matches.is_empty());

    let listed = service.list_products().await.expect("listing should succeed");
    let retired: Vec<&Product> = listed
        .iter()
        .filter(|candidate| !candidate.is_active())
        .collect();
    assert_eq!(retired.len(), 1);
}
