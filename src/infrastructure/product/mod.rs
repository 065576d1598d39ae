//! Product infrastructure
//!
//! In-memory repository, the product use-case service, and the event
//! publisher that relays persisted mutations to the message bus.

mod publisher;
mod repository;
mod service;

pub use publisher::ProductEventPublisher;
pub use repository::InMemoryProductRepository;
pub use service::{CreateProductRequest, ProductService, UpdateProductRequest};
