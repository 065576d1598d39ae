//! User service - use cases over the user repository

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{Email, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request to create a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request to update an existing user
///
/// Omitted fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User service for account use cases
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user and return its fresh identifier
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserId, DomainError> {
        let email =
            Email::new(request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        let id = UserId::generate();
        let user = User::create(id.clone(), request.name, email)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.save(user).await?;

        debug!(user_id = %id, "Created user");

        Ok(id)
    }

    /// Get a user by ID; absent is not an error
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = self.parse_id(id)?;
        self.repository.find_by_id(&user_id).await
    }

    /// List all users, in implementation-defined order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Apply a partial update to an existing user
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = self.parse_id(id)?;

        let mut user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(name) = request.name {
            user.rename(name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(value) = request.email {
            let email = Email::new(value).map_err(|e| DomainError::validation(e.to_string()))?;
            user.update_email(email);
        }

        self.repository.save(user.clone()).await?;

        debug!(user_id = %id, "Updated user");

        Ok(user)
    }

    /// Delete an existing user
    ///
    /// The existence check and the delete are not atomic; a concurrent
    /// delete of the same identifier surfaces as NotFound here.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let user_id = self.parse_id(id)?;

        if self.repository.find_by_id(&user_id).await?.is_none() {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        self.repository.delete(&user_id).await?;

        debug!(user_id = %id, "Deleted user");

        Ok(())
    }

    /// Look up a user by email
    ///
    /// Placeholder authentication: lists all users and returns the first
    /// whose email matches by value. There is no credential or password
    /// verification here; do not treat this as a security control.
    pub async fn login(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = Email::new(email).map_err(|e| DomainError::validation(e.to_string()))?;

        let users = self.repository.find_all().await?;
        Ok(users.into_iter().find(|u| u.email() == &email))
    }

    /// Stateless no-op, kept so the auth surface stays symmetric with login
    pub async fn logout(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn parse_id(&self, id: &str) -> Result<UserId, DomainError> {
        UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;

    fn create_service() -> (UserService<MockUserRepository>, Arc<MockUserRepository>) {
        let repository = Arc::new(MockUserRepository::new());
        (UserService::new(repository.clone()), repository)
    }

    fn john_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "John".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (service, _repo) = create_service();

        let id = service.create(john_request()).await.unwrap();

        let user = service.get(id.as_str()).await.unwrap().unwrap();
        assert_eq!(user.name(), "John");
        assert_eq!(user.email().as_str(), "john@example.com");
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[tokio::test]
    async fn test_create_invalid_email_fails_before_repository() {
        let (service, repo) = create_service();

        let result = service
            .create(CreateUserRequest {
                name: "John".to_string(),
                email: "not-an-email".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_empty_name_fails_before_repository() {
        let (service, repo) = create_service();

        let result = service
            .create(CreateUserRequest {
                name: String::new(),
                email: "john@example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_email_leaves_name_untouched() {
        let (service, _repo) = create_service();

        let id = service.create(john_request()).await.unwrap();

        let updated = service
            .update(
                id.as_str(),
                UpdateUserRequest {
                    name: None,
                    email: Some("johnny@example.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "John");
        assert_eq!(updated.email().as_str(), "johnny@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_without_save() {
        let (service, repo) = create_service();

        let result = service
            .update(
                "missing",
                UpdateUserRequest {
                    name: Some("Johnny".to_string()),
                    email: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_without_delete_call() {
        let (service, repo) = create_service();

        let result = service.delete("missing").await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(repo.delete_calls(), 0);
    }

    #[tokio::test]
    async fn test_login_matches_by_email_value() {
        let (service, _repo) = create_service();

        service.create(john_request()).await.unwrap();
        service
            .create(CreateUserRequest {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            })
            .await
            .unwrap();

        let user = service.login("john@example.com").await.unwrap().unwrap();
        assert_eq!(user.name(), "John");
    }

    #[tokio::test]
    async fn test_login_unknown_email_returns_none() {
        let (service, _repo) = create_service();

        service.create(john_request()).await.unwrap();

        let user = service.login("nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_login_malformed_email_fails_validation() {
        let (service, repo) = create_service();

        let result = service.login("nobody").await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.find_calls(), 0);
    }

    #[tokio::test]
    async fn test_logout_is_a_no_op() {
        let (service, _repo) = create_service();
        assert!(service.logout().await.is_ok());
    }
}
