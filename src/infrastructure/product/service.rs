//! Product service - use cases over the product repository
//!
//! Each public method is a single stateless unit of work: validate inputs
//! by constructing value objects, mutate the aggregate, persist through
//! the repository contract. Failures propagate unchanged; there is no
//! local recovery or retry.

use std::sync::Arc;

use tracing::debug;

use crate::domain::product::{Price, Product, ProductId, ProductRepository};
use crate::domain::DomainError;

use super::publisher::ProductEventPublisher;

/// Request to create a new product
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: String,
}

/// Request to update an existing product
///
/// Omitted fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Product service for catalog use cases
#[derive(Debug)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    publisher: Option<ProductEventPublisher>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new product service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            publisher: None,
        }
    }

    /// Attach an event publisher, notified after successful saves
    pub fn with_publisher(mut self, publisher: ProductEventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Create a new product and return its fresh identifier
    ///
    /// Value-object construction runs before any repository call, so a
    /// validation failure never reaches the store.
    pub async fn create(&self, request: CreateProductRequest) -> Result<ProductId, DomainError> {
        let price =
            Price::new(request.price).map_err(|e| DomainError::validation(e.to_string()))?;

        let id = ProductId::generate();
        let product = Product::create(id.clone(), request.name, price, request.category_id)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.save(product.clone()).await?;

        debug!(product_id = %id, "Created product");

        if let Some(publisher) = &self.publisher {
            publisher.product_created(&product).await;
        }

        Ok(id)
    }

    /// Get a product by ID; absent is not an error
    pub async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let product_id = self.parse_id(id)?;
        self.repository.find_by_id(&product_id).await
    }

    /// List all products, in implementation-defined order
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repository.find_all().await
    }

    /// Apply a partial update to an existing product
    ///
    /// Each supplied field is re-validated through its value object before
    /// assignment. The fetch and the save are separate repository calls;
    /// concurrent updates to the same identifier can interleave, last save
    /// wins.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        let product_id = self.parse_id(id)?;

        let mut product = self
            .repository
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Product '{}' not found", id)))?;

        if let Some(name) = request.name {
            product
                .rename(name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(value) = request.price {
            let price = Price::new(value).map_err(|e| DomainError::validation(e.to_string()))?;
            product.update_price(price);
        }

        self.repository.save(product.clone()).await?;

        debug!(product_id = %id, "Updated product");

        if let Some(publisher) = &self.publisher {
            publisher.product_updated(&product).await;
        }

        Ok(product)
    }

    /// Delete an existing product
    ///
    /// The existence check and the delete are not atomic; a concurrent
    /// delete of the same identifier surfaces as NotFound here.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let product_id = self.parse_id(id)?;

        if self.repository.find_by_id(&product_id).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "Product '{}' not found",
                id
            )));
        }

        self.repository.delete(&product_id).await?;

        debug!(product_id = %id, "Deleted product");

        Ok(())
    }

    fn parse_id(&self, id: &str) -> Result<ProductId, DomainError> {
        ProductId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }
}
