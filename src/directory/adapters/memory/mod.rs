//! In-memory adapter implementations for testing and embedding.

mod client;

pub use client::InMemoryClientRepository;
