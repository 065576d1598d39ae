//! Application state for shared services

use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::domain::messaging::MessageBus;
use crate::domain::product::{Product, ProductId, ProductRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::product::{
    CreateProductRequest, ProductService, UpdateProductRequest,
};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    /// Available to collaborators; no use case consumes it
    pub cache: Arc<dyn Cache>,
    pub message_bus: Arc<dyn MessageBus>,
}

impl AppState {
    pub fn new(
        product_service: Arc<dyn ProductServiceTrait>,
        user_service: Arc<dyn UserServiceTrait>,
        cache: Arc<dyn Cache>,
        message_bus: Arc<dyn MessageBus>,
    ) -> Self {
        Self {
            product_service,
            user_service,
            cache,
            message_bus,
        }
    }
}

/// Trait for product service operations
#[async_trait::async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn create(&self, request: CreateProductRequest) -> Result<ProductId, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Product>, DomainError>;
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
    async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<UserId, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn login(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn logout(&self) -> Result<(), DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: ProductRepository> ProductServiceTrait for ProductService<R> {
    async fn create(&self, request: CreateProductRequest) -> Result<ProductId, DomainError> {
        ProductService::create(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        ProductService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        ProductService::list(self).await
    }

    async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, DomainError> {
        ProductService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        ProductService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository> UserServiceTrait for UserService<R> {
    async fn create(&self, request: CreateUserRequest) -> Result<UserId, DomainError> {
        UserService::create(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn login(&self, email: &str) -> Result<Option<User>, DomainError> {
        UserService::login(self, email).await
    }

    async fn logout(&self) -> Result<(), DomainError> {
        UserService::logout(self).await
    }
}
