//! Unit tests for the product catalog.

mod service_tests;
