//! Product aggregate root.

use super::{CatalogDomainError, ProductId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Creates a validated product name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyName`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogDomainError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether this name contains `fragment`, ignoring case.
    ///
    /// This is the matching rule lead intake uses to link requested product
    /// names; it is substring containment, not tokenization.
    #[must_use]
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        self.0
            .to_lowercase()
            .contains(&fragment.trim().to_lowercase())
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameter object for creating a fresh product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Validated product name.
    pub name: ProductName,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Unit price in cents.
    pub unit_price_cents: i64,
}

/// Parameter object for reconstructing a persisted product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProductData {
    /// Persisted product identifier.
    pub id: ProductId,
    /// Persisted name.
    pub name: ProductName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted unit price in cents.
    pub unit_price_cents: i64,
    /// Persisted availability flag.
    pub active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Product aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: Option<String>,
    unit_price_cents: i64,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new active product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::NegativePrice`] when the unit price is
    /// below zero.
    pub fn new(new: NewProduct, clock: &impl Clock) -> Result<Self, CatalogDomainError> {
        if new.unit_price_cents < 0 {
            return Err(CatalogDomainError::NegativePrice(new.unit_price_cents));
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: ProductId::new(),
            name: new.name,
            description: new.description,
            unit_price_cents: new.unit_price_cents,
            active: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a product from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProductData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            unit_price_cents: data.unit_price_cents,
            active: data.active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    #[must_use]
    pub const fn name(&self) -> &ProductName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the unit price in cents.
    #[must_use]
    pub const fn unit_price_cents(&self) -> i64 {
        self.unit_price_cents
    }

    /// Reports whether the product is available for linking.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the name.
    pub fn rename(&mut self, name: ProductName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Replaces the unit price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::NegativePrice`] when the price is
    /// below zero.
    pub fn set_unit_price(
        &mut self,
        unit_price_cents: i64,
        clock: &impl Clock,
    ) -> Result<(), CatalogDomainError> {
        if unit_price_cents < 0 {
            return Err(CatalogDomainError::NegativePrice(unit_price_cents));
        }
        self.unit_price_cents = unit_price_cents;
        self.touch(clock);
        Ok(())
    }

    /// Takes the product off the catalog.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.active = false;
        self.touch(clock);
    }

    /// Puts the product back on the catalog.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.active = true;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
