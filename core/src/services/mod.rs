//! Business services.
//!
//! - `token` - session token issuance and validation
//! - `auth` - login, registration and profile lookup

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{TokenService, TokenServiceConfig};
