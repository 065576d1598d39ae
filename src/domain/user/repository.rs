//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Upsert a user by identifier, returning the previously stored entity
    /// if one existed
    ///
    /// Saving the same entity twice leaves the store in the same observable
    /// state as saving it once with the latest values.
    async fn save(&self, user: User) -> Result<Option<User>, DomainError>;

    /// Find a user by their ID; absent is not an error
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List all users, in implementation-defined order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user by ID, returning whether a record was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Check if a user exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing, with per-operation call counters
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
        save_calls: Arc<AtomicUsize>,
        find_calls: Arc<AtomicUsize>,
        delete_calls: Arc<AtomicUsize>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of save calls observed
        pub fn save_calls(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }

        /// Number of find_by_id/find_all calls observed
        pub fn find_calls(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }

        /// Number of delete calls observed
        pub fn delete_calls(&self) -> usize {
            self.delete_calls.load(Ordering::SeqCst)
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: User) -> Result<Option<User>, DomainError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            Ok(users.insert(user.id().as_str().to_string(), user))
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id.as_str()).cloned())
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().cloned().collect())
        }

        async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            Ok(users.remove(id.as_str()).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::user::Email;

        fn create_test_user(id: &str, email: &str) -> User {
            User::create(
                UserId::new(id).unwrap(),
                "Test User",
                Email::new(email).unwrap(),
            )
            .unwrap()
        }

        #[tokio::test]
        async fn test_save_and_find() {
            let repo = MockUserRepository::new();
            let user = create_test_user("u-1", "john@example.com");

            assert!(repo.save(user.clone()).await.unwrap().is_none());

            let found = repo.find_by_id(user.id()).await.unwrap();
            assert_eq!(found.unwrap().email().as_str(), "john@example.com");
        }

        #[tokio::test]
        async fn test_save_is_an_upsert() {
            let repo = MockUserRepository::new();
            let user = create_test_user("u-1", "john@example.com");

            repo.save(user.clone()).await.unwrap();

            let mut changed = user.clone();
            changed.update_email(Email::new("johnny@example.com").unwrap());
            let previous = repo.save(changed).await.unwrap();

            assert_eq!(previous.unwrap().email().as_str(), "john@example.com");
            assert_eq!(repo.find_all().await.unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_delete() {
            let repo = MockUserRepository::new();
            let user = create_test_user("u-1", "john@example.com");

            repo.save(user.clone()).await.unwrap();
            assert!(repo.delete(user.id()).await.unwrap());
            assert!(repo.find_by_id(user.id()).await.unwrap().is_none());
            assert!(!repo.delete(user.id()).await.unwrap());
        }

        #[tokio::test]
        async fn test_configured_failure() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.find_all().await;
            assert!(result.is_err());
        }
    }
}
