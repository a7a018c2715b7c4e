//! Service layer for inquiry intake: validation, tagging, product linking.

use crate::catalog::ports::{ProductRepository, ProductRepositoryError};
use crate::lead::{
    domain::{
        Inquiry, LeadDomainError, LeadPriority, NewInquiry, ProductLine, TagInput, derive_tags,
    },
    ports::{InquiryRepository, InquiryRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// One requested product on an intake submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLineRequest {
    name: String,
    quantity: u32,
}

impl ProductLineRequest {
    /// Creates a requested product line.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Request payload for creating an inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInquiryRequest {
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    priority: LeadPriority,
    products: Vec<ProductLineRequest>,
}

impl CreateInquiryRequest {
    /// Creates a request with the required contact fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: None,
            priority: LeadPriority::Medium,
            products: Vec::new(),
        }
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the free-form message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the urgency level.
    #[must_use]
    pub fn with_priority(mut self, priority: LeadPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a requested product line.
    #[must_use]
    pub fn with_product(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.products.push(ProductLineRequest::new(name, quantity));
        self
    }
}

/// Service-level errors for inquiry intake.
#[derive(Debug, Error)]
pub enum LeadIntakeError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LeadDomainError),
    /// Inquiry persistence failed.
    #[error(transparent)]
    Repository(#[from] InquiryRepositoryError),
    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] ProductRepositoryError),
}

/// Result type for intake service operations.
pub type LeadIntakeResult<T> = Result<T, LeadIntakeError>;

/// Inquiry intake orchestration service.
#[derive(Clone)]
pub struct LeadIntakeService<R, P, C>
where
    R: InquiryRepository,
    P: ProductRepository,
    C: Clock + Send + Sync,
{
    inquiries: Arc<R>,
    catalog: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> LeadIntakeService<R, P, C>
where
    R: InquiryRepository,
    P: ProductRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(inquiries: Arc<R>, catalog: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            inquiries,
            catalog,
            clock,
        }
    }

    /// Creates an inquiry from a submission.
    ///
    /// Requested product names are resolved against the catalog by
    /// case-insensitive substring match; a name with no match is left
    /// unlinked and logged rather than failing the submission. The tag
    /// snapshot is derived here, once, and never recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`LeadIntakeError`] when contact validation fails, a
    /// product line is malformed, or persistence rejects the inquiry.
    pub async fn create_inquiry(
        &self,
        request: CreateInquiryRequest,
    ) -> LeadIntakeResult<Inquiry> {
        let mut lines = Vec::with_capacity(request.products.len());
        for product in request.products {
            lines.push(ProductLine::new(product.name, product.quantity)?);
        }
        for line in &mut lines {
            self.resolve_line(line).await?;
        }

        let tags = derive_tags(&TagInput::new(
            request.message.as_deref(),
            request.phone.as_deref(),
            &lines,
        ));

        let inquiry = Inquiry::new(
            NewInquiry {
                name: request.name,
                email: request.email,
                phone: request.phone,
                message: request.message,
                priority: request.priority,
                product_lines: lines,
                tags,
            },
            &*self.clock,
        )?;
        self.inquiries.insert(&inquiry).await?;
        Ok(inquiry)
    }

    /// Links a line to the first catalog match for its requested name.
    async fn resolve_line(&self, line: &mut ProductLine) -> LeadIntakeResult<()> {
        let matches = self.catalog.search_by_name(line.requested_name()).await?;
        match matches.first() {
            Some(product) => line.link(product.id()),
            None => {
                info!(
                    requested = line.requested_name(),
                    "no catalog match for requested product, leaving line unlinked"
                );
            }
        }
        Ok(())
    }
}
