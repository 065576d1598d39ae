//! Domain events emitted after product mutations are persisted

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Product;

/// Topic for product creation events
pub const PRODUCT_CREATED_TOPIC: &str = "product.created";

/// Topic for product update events
pub const PRODUCT_UPDATED_TOPIC: &str = "product.updated";

/// Snapshot of a product at the moment it was created
///
/// Events are constructed after a successful persistence call, never before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub category_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl ProductCreated {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id().as_str().to_string(),
            name: product.name().to_string(),
            price: product.price().value(),
            category_id: product.category_id().to_string(),
            occurred_at: Utc::now(),
        }
    }
}

/// Snapshot of a product after an update was persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub category_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl ProductUpdated {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id().as_str().to_string(),
            name: product.name().to_string(),
            price: product.price().value(),
            category_id: product.category_id().to_string(),
            occurred_at: Utc::now(),
        }
    }
}
