//! Configuration for the token service

use super::signing_key::SecretEncoding;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret string the signing key is derived from
    pub secret: String,
    /// How the secret string should be interpreted
    pub secret_encoding: SecretEncoding,
    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            secret_encoding: SecretEncoding::Auto,
            expiration_ms: 86_400_000, // 24 hours
        }
    }
}
