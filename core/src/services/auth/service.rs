//! Main authentication service implementation

use std::sync::Arc;

use bv_shared::utils::validation::validators;

use crate::domain::entities::user::User;
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 128;

/// Service for user authentication and account registration
pub struct AuthService<U: UserRepository> {
    user_repository: U,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service instance
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user records
    /// * `token_service` - Token service used to issue session tokens
    pub fn new(user_repository: U, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticates a user and issues a session token
    ///
    /// Unknown usernames and wrong passwords fail with the same error so
    /// the response does not reveal which part was wrong.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The issued token with the user's identity
    /// * `Err(DomainError)` - Credentials invalid or an internal failure
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, DomainError> {
        let user = self
            .user_repository
            .find_by_username(username.trim())
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let password_ok =
            bcrypt::verify(password, &user.password_hash).map_err(|_| DomainError::Internal {
                message: "password verification failed".to_string(),
            })?;
        if !password_ok {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let token = self.token_service.issue(&user.username, user.id)?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(AuthResponse::new(
            token,
            user.id,
            user.username,
            self.token_service.expires_in_seconds(),
        ))
    }

    /// Registers a new user account
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user with its assigned identifier
    /// * `Err(DomainError)` - Input invalid or username/email already taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let username = username.trim();
        let email = email.trim();

        if !validators::length_between(username, USERNAME_MIN, USERNAME_MAX) {
            return Err(ValidationError::InvalidLength {
                field: "username".to_string(),
                min: USERNAME_MIN,
                max: USERNAME_MAX,
            }
            .into());
        }
        if !validators::is_valid_username(username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validators::length_between(password, PASSWORD_MIN, PASSWORD_MAX) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: PASSWORD_MIN,
                max: PASSWORD_MAX,
            }
            .into());
        }

        if self.user_repository.exists_by_username(username).await? {
            return Err(DomainError::Auth(AuthError::UsernameTaken));
        }
        if self.user_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailTaken));
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|_| DomainError::Internal {
                message: "password hashing failed".to_string(),
            })?;

        let user = self
            .user_repository
            .create(User::new(username, email, password_hash))
            .await?;
        tracing::info!(user_id = user.id, "user registered");

        Ok(user)
    }

    /// Fetches the account of an authenticated user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The user record
    /// * `Err(DomainError)` - No user with the given id
    pub async fn profile(&self, user_id: i64) -> Result<User, DomainError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    /// The token service backing this instance, for middleware wiring
    pub fn token_service(&self) -> Arc<TokenService> {
        Arc::clone(&self.token_service)
    }
}
