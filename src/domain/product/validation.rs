//! Product validation utilities

use thiserror::Error;

/// Errors that can occur during product validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductValidationError {
    #[error("Product ID cannot be empty")]
    EmptyId,

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Price cannot be negative: {0}")]
    NegativePrice(f64),
}

/// Validate a product ID
///
/// Identifiers are opaque tokens; the only structural requirement is that
/// they are non-empty.
pub fn validate_product_id(id: &str) -> Result<(), ProductValidationError> {
    if id.is_empty() {
        return Err(ProductValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), ProductValidationError> {
    if name.trim().is_empty() {
        return Err(ProductValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a price value
pub fn validate_price(value: f64) -> Result<(), ProductValidationError> {
    if value < 0.0 {
        return Err(ProductValidationError::NegativePrice(value));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product_ids() {
        assert!(validate_product_id("p-1").is_ok());
        assert!(validate_product_id("019231f2-7a3e-7cc0-8000-3f0c6c1e0a42").is_ok());
    }

    #[test]
    fn test_empty_product_id() {
        assert_eq!(validate_product_id(""), Err(ProductValidationError::EmptyId));
    }

    #[test]
    fn test_valid_product_names() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("A").is_ok());
    }

    #[test]
    fn test_empty_product_name() {
        assert_eq!(
            validate_product_name(""),
            Err(ProductValidationError::EmptyName)
        );
        assert_eq!(
            validate_product_name("   "),
            Err(ProductValidationError::EmptyName)
        );
    }

    #[test]
    fn test_valid_prices() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(9.99).is_ok());
    }

    #[test]
    fn test_negative_price() {
        assert_eq!(
            validate_price(-0.01),
            Err(ProductValidationError::NegativePrice(-0.01))
        );
    }
}
