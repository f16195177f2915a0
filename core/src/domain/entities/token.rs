//! Token claims for the signed session token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the session token payload
///
/// The wire names follow the deployed token format: the username travels
/// in the standard `sub` claim and the numeric identifier in a custom
/// `userId` claim. `user_id` is optional on the way in so that tokens
/// minted by an older scheme still parse; extraction treats its absence
/// as a missing-claim error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Numeric user identifier
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a session token expiring `ttl` from now
    pub fn new_session(username: impl Into<String>, user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: username.into(),
            user_id: Some(user_id),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
