//! Product domain
//!
//! Value objects, the Product aggregate, the repository contract it is
//! persisted through, and the domain events emitted after mutations.

mod entity;
mod events;
mod repository;
mod validation;

pub use entity::{Price, Product, ProductId};
pub use events::{
    ProductCreated, ProductUpdated, PRODUCT_CREATED_TOPIC, PRODUCT_UPDATED_TOPIC,
};
pub use repository::ProductRepository;
pub use validation::{
    validate_price, validate_product_id, validate_product_name, ProductValidationError,
};

#[cfg(test)]
pub use repository::mock::MockProductRepository;
