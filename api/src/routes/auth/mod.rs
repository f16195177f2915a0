//! Authentication and account route handlers
//!
//! This module contains the endpoints backing the web client:
//! - User login issuing session tokens
//! - User registration with duplicate checks
//! - Profile lookup for authenticated requests

pub mod login;
pub mod profile;
pub mod register;

use std::sync::Arc;

use bv_core::repositories::UserRepository;
use bv_core::services::auth::AuthService;

/// Shared application state injected into handlers
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}
