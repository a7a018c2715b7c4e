//! Unit tests for the client directory.

mod domain_tests;
