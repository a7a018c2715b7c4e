//! Port contracts for lead management.

pub mod repository;

pub use repository::{InquiryRepository, InquiryRepositoryError, InquiryRepositoryResult};
