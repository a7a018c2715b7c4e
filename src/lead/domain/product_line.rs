//! Requested product associations on an inquiry.

use super::LeadDomainError;
use crate::catalog::domain::ProductId;
use serde::{Deserialize, Serialize};

/// One requested product on an inquiry.
///
/// The link to a catalog record is best-effort: intake matches the
/// requested name against the catalog and leaves the line unlinked when
/// nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLine {
    requested_name: String,
    quantity: u32,
    product_id: Option<ProductId>,
}

impl ProductLine {
    /// Creates an unlinked product line.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyProductName`] when the requested
    /// name is blank and [`LeadDomainError::ZeroQuantity`] when no units
    /// are requested.
    pub fn new(requested_name: impl Into<String>, quantity: u32) -> Result<Self, LeadDomainError> {
        let raw = requested_name.into();
        let name = raw.trim().to_owned();
        if name.is_empty() {
            return Err(LeadDomainError::EmptyProductName);
        }
        if quantity == 0 {
            return Err(LeadDomainError::ZeroQuantity(name));
        }
        Ok(Self {
            requested_name: name,
            quantity,
            product_id: None,
        })
    }

    /// Returns the requested product name as submitted.
    #[must_use]
    pub fn requested_name(&self) -> &str {
        &self.requested_name
    }

    /// Returns the requested quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the linked catalog record, if resolution succeeded.
    #[must_use]
    pub const fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    /// Links this line to a catalog record.
    pub fn link(&mut self, product_id: ProductId) {
        self.product_id = Some(product_id);
    }

    /// Returns this line with a catalog link attached.
    #[must_use]
    pub fn linked_to(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }
}
