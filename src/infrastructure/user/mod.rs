//! User infrastructure
//!
//! In-memory repository and the user use-case service.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
