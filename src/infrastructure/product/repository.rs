//! In-memory product repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::{Product, ProductId, ProductRepository};
use crate::domain::DomainError;

/// In-memory product repository backed by a HashMap
///
/// The lock guards individual operations only; there is no cross-call
/// transaction, so fetch-then-save sequences in the service layer can
/// still interleave.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.insert(product.id().as_str().to_string(), product))
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.remove(id.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Price;

    fn create_test_product(id: &str, name: &str, price: f64) -> Product {
        Product::create(
            ProductId::new(id).unwrap(),
            name,
            Price::new(price).unwrap(),
            "cat-1",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryProductRepository::new();
        let product = create_test_product("p-1", "Widget", 9.99);

        let previous = repo.save(product.clone()).await.unwrap();
        assert!(previous.is_none());

        let found = repo.find_by_id(product.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Widget");
        assert_eq!(found.price().value(), 9.99);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryProductRepository::new();
        let id = ProductId::new("missing").unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_twice_keeps_latest_values() {
        let repo = InMemoryProductRepository::new();
        let product = create_test_product("p-1", "Widget", 9.99);

        repo.save(product.clone()).await.unwrap();

        let mut updated = product.clone();
        updated.update_price(Price::new(19.99).unwrap());
        let previous = repo.save(updated).await.unwrap().unwrap();

        assert_eq!(previous.price().value(), 9.99);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].price().value(), 19.99);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryProductRepository::new();
        let product = create_test_product("p-1", "Widget", 9.99);

        repo.save(product.clone()).await.unwrap();
        assert!(repo.delete(product.id()).await.unwrap());
        assert!(!repo.delete(product.id()).await.unwrap());
        assert!(repo.find_by_id(product.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryProductRepository::new();
        let product = create_test_product("p-1", "Widget", 9.99);

        assert!(!repo.exists(product.id()).await.unwrap());
        repo.save(product.clone()).await.unwrap();
        assert!(repo.exists(product.id()).await.unwrap());
    }
}
