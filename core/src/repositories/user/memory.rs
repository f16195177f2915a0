//! In-memory implementation of the user repository.
//!
//! Backs the default server wiring and the test suites; durable storage
//! is out of scope for this service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Thread-safe in-memory user store with sequential numeric ids
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Uniqueness guards mirror the database constraints
        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::Validation {
                message: "Username already registered".to_string(),
            });
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo
            .create(User::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();
        let bob = repo
            .create(User::new("bob", "bob@example.com", "hash"))
            .await
            .unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_username_and_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(by_name, by_id);
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        let result = repo
            .create(User::new("alice", "other@example.com", "hash"))
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_exists_checks() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("alice", "alice@example.com", "hash"))
            .await
            .unwrap();

        assert!(repo.exists_by_username("alice").await.unwrap());
        assert!(repo.exists_by_email("alice@example.com").await.unwrap());
        assert!(!repo.exists_by_username("bob").await.unwrap());
        assert!(!repo.exists_by_email("bob@example.com").await.unwrap());
    }
}
