//! Catalog API
//!
//! A layered backend for managing products and users:
//! - Self-validating value objects and entities in `domain`
//! - Repository, cache, and message-bus contracts as the seams the core
//!   depends on
//! - Use-case services in `infrastructure` orchestrating validation,
//!   mutation, and persistence
//! - Thin axum transport glue in `api`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::cache::CacheFactory;
use infrastructure::messaging::InMemoryMessageBus;
use infrastructure::product::{
    InMemoryProductRepository, ProductEventPublisher, ProductService,
};
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// All dependencies are passed explicitly through constructors; there is
/// no ambient registry.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache = CacheFactory::create(&config.cache).await?;

    let message_bus = Arc::new(InMemoryMessageBus::new());

    let product_repository = Arc::new(InMemoryProductRepository::new());
    let product_publisher = ProductEventPublisher::new(message_bus.clone());
    let product_service = Arc::new(
        ProductService::new(product_repository).with_publisher(product_publisher),
    );

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(user_repository));

    info!("Application state initialized");

    Ok(AppState::new(
        product_service,
        user_service,
        cache,
        message_bus,
    ))
}
