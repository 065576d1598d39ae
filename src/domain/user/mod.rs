//! User domain
//!
//! Value objects, the User aggregate, and its repository contract.

mod entity;
mod repository;
mod validation;

pub use entity::{Email, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_user_id, validate_user_name, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
