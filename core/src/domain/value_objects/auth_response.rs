//! Authentication response value object.

use serde::{Deserialize, Serialize};

/// Result of a successful login: the issued session token plus the
/// identity it was minted for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,

    /// Numeric identifier of the authenticated user
    pub user_id: i64,

    /// Username of the authenticated user
    pub username: String,

    /// Token lifetime in seconds, as advertised to clients
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(token: String, user_id: i64, username: String, expires_in: i64) -> Self {
        Self {
            token,
            user_id,
            username,
            expires_in,
        }
    }
}
