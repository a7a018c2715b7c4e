//! Shared test helpers for in-memory integration tests.

use atelier::board::{adapters::memory::InMemoryBoardRepository, services::BoardService};
use atelier::catalog::{
    adapters::memory::InMemoryProductRepository,
    services::{CatalogService, CreateProductRequest},
};
use atelier::directory::adapters::memory::InMemoryClientRepository;
use atelier::lead::{
    adapters::memory::InMemoryInquiryRepository,
    services::{LeadIntakeService, LeadLifecycleService},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Board service over a fresh in-memory repository.
pub fn board_service() -> BoardService<InMemoryBoardRepository, DefaultClock> {
    BoardService::new(Arc::new(InMemoryBoardRepository::new()), Arc::new(DefaultClock))
}

/// All lead-side services wired over fresh in-memory repositories.
pub struct LeadStack {
    /// Intake service resolving products against the in-memory catalog.
    pub intake: LeadIntakeService<InMemoryInquiryRepository, InMemoryProductRepository, DefaultClock>,
    /// Lifecycle service converting into the in-memory directory.
    pub lifecycle:
        LeadLifecycleService<InMemoryInquiryRepository, InMemoryClientRepository, DefaultClock>,
    /// Catalog service sharing the intake's product repository.
    pub catalog: CatalogService<InMemoryProductRepository, DefaultClock>,
    /// Shared client repository, exposed for assertions.
    pub clients: Arc<InMemoryClientRepository>,
}

/// Wires a full lead stack over in-memory adapters.
pub fn lead_stack() -> LeadStack {
    let inquiries = Arc::new(InMemoryInquiryRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let clients = Arc::new(InMemoryClientRepository::new());
    let clock = Arc::new(DefaultClock);

    LeadStack {
        intake: LeadIntakeService::new(
            Arc::clone(&inquiries),
            Arc::clone(&products),
            Arc::clone(&clock),
        ),
        lifecycle: LeadLifecycleService::new(inquiries, Arc::clone(&clients), Arc::clone(&clock)),
        catalog: CatalogService::new(products, clock),
        clients,
    }
}

/// Seeds a handful of catalog products used by the lead flow tests.
pub async fn seed_catalog(catalog: &CatalogService<InMemoryProductRepository, DefaultClock>) {
    for (name, price) in [
        ("Vestido rojo de gala", 8900),
        ("Blazer entallado gris", 12900),
        ("Camisa de lino blanca", 5500),
    ] {
        catalog
            .create_product(CreateProductRequest::new(name, price))
            .await
            .expect("catalog seeding should succeed");
    }
}
