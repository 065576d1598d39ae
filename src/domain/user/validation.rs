//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User name cannot be empty")]
    EmptyName,

    #[error("Invalid email: '{0}'")]
    InvalidEmail(String),
}

/// Validate a user ID
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a user name
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate an email address
///
/// Minimal syntactic check only: the value must contain an "@" separator.
/// This is deliberately not RFC validation.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() || !email.contains('@') {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_id() {
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
        assert!(validate_user_id("u-1").is_ok());
    }

    #[test]
    fn test_empty_user_name() {
        assert_eq!(validate_user_name(""), Err(UserValidationError::EmptyName));
        assert_eq!(
            validate_user_name("  "),
            Err(UserValidationError::EmptyName)
        );
        assert!(validate_user_name("John").is_ok());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("a@b").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email(""),
            Err(UserValidationError::InvalidEmail(String::new()))
        );
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }
}
