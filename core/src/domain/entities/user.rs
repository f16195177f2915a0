//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier, assigned by the repository on creation
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Bcrypt hash of the password; never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance; the repository assigns the real id
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
