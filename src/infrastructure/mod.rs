//! Infrastructure layer
//!
//! Concrete implementations of the domain contracts (repositories, cache,
//! message bus), the use-case services that orchestrate them, and process
//! concerns like logging.

pub mod cache;
pub mod logging;
pub mod messaging;
pub mod product;
pub mod user;
