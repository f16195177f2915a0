//! Authentication and token configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Accepted values for the secret encoding selector.
const SECRET_ENCODINGS: [&str; 3] = ["auto", "base64", "plain"];

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret string the signing key is derived from
    pub secret: String,

    /// How the secret should be interpreted: "auto" (heuristic detection,
    /// the default), "base64" (strict decoding) or "plain" (raw UTF-8)
    #[serde(default = "default_secret_encoding")]
    pub secret_encoding: String,

    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            secret_encoding: default_secret_encoding(),
            expiration_ms: 86_400_000, // 24 hours
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in milliseconds
    pub fn with_expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Load the JWT configuration from environment variables.
    ///
    /// `JWT_SECRET` and `JWT_EXPIRATION` (milliseconds) are required;
    /// `JWT_SECRET_ENCODING` defaults to "auto". Missing or unparseable
    /// values are startup errors, never per-request errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("JWT_SECRET").ok(),
            env::var("JWT_EXPIRATION").ok(),
            env::var("JWT_SECRET_ENCODING").ok(),
        )
    }

    fn from_values(
        secret: Option<String>,
        expiration: Option<String>,
        encoding: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.ok_or_else(|| ConfigError::MissingVar {
            name: "JWT_SECRET".to_string(),
        })?;

        let expiration = expiration.ok_or_else(|| ConfigError::MissingVar {
            name: "JWT_EXPIRATION".to_string(),
        })?;
        let expiration_ms = expiration
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidVar {
                name: "JWT_EXPIRATION".to_string(),
                reason: e.to_string(),
            })?;
        if expiration_ms <= 0 {
            return Err(ConfigError::InvalidVar {
                name: "JWT_EXPIRATION".to_string(),
                reason: format!("must be a positive number of milliseconds, got {expiration_ms}"),
            });
        }

        let secret_encoding = encoding.unwrap_or_else(default_secret_encoding);
        if !SECRET_ENCODINGS.contains(&secret_encoding.as_str()) {
            return Err(ConfigError::InvalidVar {
                name: "JWT_SECRET_ENCODING".to_string(),
                reason: format!("expected one of {SECRET_ENCODINGS:?}, got {secret_encoding:?}"),
            });
        }

        Ok(Self {
            secret,
            secret_encoding,
            expiration_ms,
        })
    }
}

fn default_secret_encoding() -> String {
    String::from("auto")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.expiration_ms, 86_400_000);
        assert_eq!(config.secret_encoding, "auto");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiration_ms(900_000);

        assert_eq!(config.expiration_ms, 900_000);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_missing_secret_fails() {
        let result = JwtConfig::from_values(None, Some("86400000".to_string()), None);
        assert!(matches!(result, Err(ConfigError::MissingVar { name }) if name == "JWT_SECRET"));
    }

    #[test]
    fn test_missing_expiration_fails() {
        let result = JwtConfig::from_values(Some("secret".to_string()), None, None);
        assert!(matches!(result, Err(ConfigError::MissingVar { name }) if name == "JWT_EXPIRATION"));
    }

    #[test]
    fn test_unparseable_expiration_fails() {
        let result = JwtConfig::from_values(
            Some("secret".to_string()),
            Some("soon".to_string()),
            None,
        );
        assert!(matches!(result, Err(ConfigError::InvalidVar { name, .. }) if name == "JWT_EXPIRATION"));
    }

    #[test]
    fn test_non_positive_expiration_fails() {
        let result = JwtConfig::from_values(
            Some("secret".to_string()),
            Some("0".to_string()),
            None,
        );
        assert!(matches!(result, Err(ConfigError::InvalidVar { .. })));
    }

    #[test]
    fn test_unknown_encoding_fails() {
        let result = JwtConfig::from_values(
            Some("secret".to_string()),
            Some("86400000".to_string()),
            Some("hex".to_string()),
        );
        assert!(matches!(result, Err(ConfigError::InvalidVar { name, .. }) if name == "JWT_SECRET_ENCODING"));
    }

    #[test]
    fn test_valid_values_load() {
        let config = JwtConfig::from_values(
            Some("MySecretKeyForJWTdemoApplication1234567890".to_string()),
            Some("3600000".to_string()),
            Some("plain".to_string()),
        )
        .unwrap();

        assert_eq!(config.expiration_ms, 3_600_000);
        assert_eq!(config.secret_encoding, "plain");
    }
}
