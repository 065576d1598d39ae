//! HTTP API layer
//!
//! Thin transport glue: each handler maps one verb+path pair onto exactly
//! one use case and translates domain failures into status codes.

pub mod auth;
pub mod health;
pub mod products;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::{create_router, create_router_with_state};
