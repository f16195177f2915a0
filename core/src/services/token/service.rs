//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Service that issues and verifies signed session tokens.
///
/// The signing key is derived once from the configured secret and cached;
/// every operation afterwards is a pure in-memory computation, so the
/// service is safe to share across threads without locking.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    ttl_ms: i64,
    degraded: bool,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance, or an error when the secret cannot
    /// be decoded under a strict encoding or the expiration is invalid
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        let key = SigningKey::derive(&config.secret, config.secret_encoding)?;
        Self::with_signing_key(key, config.expiration_ms)
    }

    /// Creates a token service from explicit key material.
    ///
    /// Constructing with an ephemeral key is the degraded mode: it is
    /// logged as a warning and reported by [`TokenService::is_degraded`],
    /// since every previously issued token stops verifying.
    pub fn with_signing_key(key: SigningKey, expiration_ms: i64) -> Result<Self, DomainError> {
        if expiration_ms <= 0 {
            return Err(DomainError::Validation {
                message: format!("token expiration must be positive, got {expiration_ms}"),
            });
        }

        if key.is_ephemeral() {
            tracing::warn!(
                "token service is using an ephemeral signing key; previously \
                 issued tokens will not verify after a restart"
            );
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Tokens must stop validating exactly at their expiration instant
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
            ttl: Duration::milliseconds(expiration_ms),
            ttl_ms: expiration_ms,
            degraded: key.is_ephemeral(),
        })
    }

    /// Issues a signed session token for a verified identity
    ///
    /// # Arguments
    ///
    /// * `username` - Login name placed in the subject claim
    /// * `user_id` - Numeric identifier placed in the `userId` claim
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact signed token
    /// * `Err(DomainError)` - Token encoding failed
    pub fn issue(&self, username: &str, user_id: i64) -> Result<String, DomainError> {
        let claims = Claims::new_session(username, user_id, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Checks whether a token parses, carries a valid signature, and has
    /// not expired.
    ///
    /// Every failure mode folds into `false`; call sites that need the
    /// cause use the extraction accessors instead.
    pub fn validate(&self, token: &str) -> bool {
        match self.decode_claims(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("token validation failed: {e}");
                false
            }
        }
    }

    /// Returns the subject claim of a verified token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The username the token was issued for
    /// * `Err(DomainError)` - Token is malformed, expired, or signed with
    ///   a different key
    pub fn extract_username(&self, token: &str) -> Result<String, DomainError> {
        Ok(self.decode_claims(token)?.sub)
    }

    /// Returns the numeric `userId` claim of a verified token
    ///
    /// A verified token without the claim (issued by an older scheme) is
    /// treated as malformed rather than guessing a default.
    pub fn extract_user_id(&self, token: &str) -> Result<i64, DomainError> {
        let claims = self.decode_claims(token)?;
        claims.user_id.ok_or_else(|| {
            DomainError::Token(TokenError::MissingClaim {
                claim: "userId".to_string(),
            })
        })
    }

    /// Token lifetime in seconds, as advertised to clients
    pub fn expires_in_seconds(&self) -> i64 {
        self.ttl_ms / 1000
    }

    /// True when the service was constructed with an ephemeral key
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let err = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(err)
            })
    }
}
