//! Unit tests for the ordered-column task store.

mod domain_tests;
mod service_tests;
