//! User repository trait defining the interface for user data access.
//!
//! The trait is async-first and uses Result types for proper error
//! handling. Implementations own the actual storage while keeping the
//! boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given username
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their numeric identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its assigned identifier
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate username)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check if a user exists with the given username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check if a user exists with the given email address
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
