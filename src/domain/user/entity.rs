//! User entity and related value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_email, validate_user_id, validate_user_name, UserValidationError,
};

/// User identifier - an opaque, non-empty token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh identifier (UUIDv7, time-ordered, globally unique)
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Create a UserId from an existing token after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address - immutable, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new Email after validation
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        validate_email(&value)?;
        Ok(Self(value))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, fixed for the lifetime of the aggregate
    id: UserId,
    /// Display name, never empty
    name: String,
    /// Contact email
    email: Email,
    /// Creation timestamp, never reassigned
    created_at: DateTime<Utc>,
    /// Advanced on every mutation
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, stamping both timestamps to the same instant
    pub fn create(
        id: UserId,
        name: impl Into<String>,
        email: Email,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        validate_user_name(&name)?;

        let now = Utc::now();

        Ok(Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Rename the user, re-validating the new name
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), UserValidationError> {
        let name = name.into();
        validate_user_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the email with a new value object
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Advance the update timestamp to the current instant
    fn touch(&mut self) -> DateTime<Utc> {
        self.updated_at = Utc::now();
        self.updated_at
    }
}
