//! Product repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Product, ProductId};
use crate::domain::DomainError;

/// Repository trait for product storage
///
/// The concrete store is a collaborator behind this seam; the core is
/// written and tested against fake implementations of it.
#[async_trait]
pub trait ProductRepository: Send + Sync + Debug {
    /// Upsert a product by identifier, returning the previously stored
    /// entity if one existed
    ///
    /// Saving the same entity twice leaves the store in the same observable
    /// state as saving it once with the latest values.
    async fn save(&self, product: Product) -> Result<Option<Product>, DomainError>;

    /// Find a product by its ID; absent is not an error
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// List all products, in implementation-defined order
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Delete a product by ID, returning whether a record was removed
    ///
    /// Deleting a missing ID is not an error here; existence checks belong
    /// to the use-case layer.
    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError>;

    /// Check if a product exists
    async fn exists(&self, id: &ProductId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
