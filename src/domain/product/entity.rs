//! Product entity and related value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_price, validate_product_id, validate_product_name, ProductValidationError,
};

/// Product identifier - an opaque, non-empty token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh identifier
    ///
    /// Generated values are UUIDv7, so they sort by creation time and are
    /// globally unique. An identifier is never reused.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Create a ProductId from an existing token after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ProductValidationError> {
        let id = id.into();
        validate_product_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary price - non-negative, immutable
///
/// Updates replace the whole value object; there is no in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a new Price after validation
    pub fn new(value: f64) -> Result<Self, ProductValidationError> {
        validate_price(value)?;
        Ok(Self(value))
    }

    /// Get the inner numeric value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ProductValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Product aggregate
///
/// The repository is the system of record; an instance in memory is a
/// transient copy owned by whichever caller holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, fixed for the lifetime of the aggregate
    id: ProductId,
    /// Display name, never empty
    name: String,
    /// Current price
    price: Price,
    /// Opaque reference to a category; not a modeled relationship
    category_id: String,
    /// Creation timestamp, never reassigned
    created_at: DateTime<Utc>,
    /// Advanced on every mutation
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product, stamping both timestamps to the same instant
    pub fn create(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category_id: impl Into<String>,
    ) -> Result<Self, ProductValidationError> {
        let name = name.into();
        validate_product_name(&name)?;

        let now = Utc::now();

        Ok(Self {
            id,
            name,
            price,
            category_id: category_id.into(),
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Rename the product, re-validating the new name
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ProductValidationError> {
        let name = name.into();
        validate_product_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the price with a new value object
    pub fn update_price(&mut self, price: Price) {
        self.price = price;
        self.touch();
    }

    /// Advance the update timestamp to the current instant
    fn touch(&mut self) -> DateTime<Utc> {
        self.updated_at = Utc::now();
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::create(
            ProductId::generate(),
            "Widget",
            Price::new(9.99).unwrap(),
            "cat-1",
        )
        .unwrap()
    }

    #[test]
    fn test_generate_ids_are_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_product_id_rejects_empty() {
        assert!(ProductId::new("").is_err());
    }

    #[test]
    fn test_product_id_equality_by_value() {
        let a = ProductId::new("p-1").unwrap();
        let b = ProductId::new("p-1").unwrap();
        let c = ProductId::new("p-2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_price_rejects_negative() {
        assert_eq!(
            Price::new(-1.0),
            Err(ProductValidationError::NegativePrice(-1.0))
        );
    }

    #[test]
    fn test_price_equality_by_value() {
        assert_eq!(Price::new(9.99).unwrap(), Price::new(9.99).unwrap());
        assert_ne!(Price::new(9.99).unwrap(), Price::new(19.99).unwrap());
    }

    #[test]
    fn test_create_stamps_timestamps_together() {
        let product = widget();
        assert_eq!(product.created_at(), product.updated_at());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let result = Product::create(
            ProductId::generate(),
            "",
            Price::new(1.0).unwrap(),
            "cat-1",
        );
        assert_eq!(result, Err(ProductValidationError::EmptyName));
    }

    #[test]
    fn test_rename_advances_updated_at() {
        let mut product = widget();
        let created = product.created_at();
        let before = product.updated_at();

        product.rename("Gadget").unwrap();

        assert_eq!(product.name(), "Gadget");
        assert!(product.updated_at() >= before);
        assert_eq!(product.created_at(), created);
    }

    #[test]
    fn test_rename_rejects_empty_name() {
        let mut product = widget();
        assert_eq!(product.rename(""), Err(ProductValidationError::EmptyName));
        assert_eq!(product.name(), "Widget");
    }

    #[test]
    fn test_update_price_advances_updated_at() {
        let mut product = widget();
        let created = product.created_at();
        let before = product.updated_at();

        product.update_price(Price::new(19.99).unwrap());

        assert_eq!(product.price().value(), 19.99);
        assert!(product.updated_at() >= before);
        assert_eq!(product.created_at(), created);
    }

    #[test]
    fn test_serde_rejects_empty_id() {
        let result: Result<ProductId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_rejects_negative_price() {
        let result: Result<Price, _> = serde_json::from_str("-2.5");
        assert!(result.is_err());
    }
}
