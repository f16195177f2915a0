//! Unit tests for the token service

use std::thread;
use std::time::Duration as StdDuration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{SecretEncoding, SigningKey, TokenService, TokenServiceConfig};

fn service_with_secret(secret: &str, expiration_ms: i64) -> TokenService {
    TokenService::new(TokenServiceConfig {
        secret: secret.to_string(),
        secret_encoding: SecretEncoding::Auto,
        expiration_ms,
    })
    .expect("failed to create token service")
}

/// Signs arbitrary claims with the key derived from `secret`, bypassing
/// the service so tests can control `exp` and `userId` directly.
fn forge_token(secret: &str, claims: &Claims) -> String {
    let key = SigningKey::derive(secret, SecretEncoding::Auto).unwrap();
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_then_validate_round_trip() {
    // Plain-text secret longer than 32 bytes, used as-is
    let service = service_with_secret("MySecretKeyForJWTdemoApplication1234567890", 86_400_000);

    let token = service.issue("alice", 42).unwrap();

    assert!(service.validate(&token));
    assert_eq!(service.extract_username(&token).unwrap(), "alice");
    assert_eq!(service.extract_user_id(&token).unwrap(), 42);
}

#[test]
fn test_short_plain_secrets_round_trip() {
    // Both go through the SHA-256 stretch path
    for secret in ["abc", "short"] {
        let service = service_with_secret(secret, 60_000);
        let token = service.issue("bob", 7).unwrap();

        assert!(service.validate(&token), "secret {secret:?} failed");
        assert_eq!(service.extract_user_id(&token).unwrap(), 7);
    }
}

#[test]
fn test_base64_secret_round_trips() {
    let secret = BASE64.encode([7u8; 48]);
    let service = service_with_secret(&secret, 60_000);

    let token = service.issue("carol", 3).unwrap();

    assert!(service.validate(&token));
    assert_eq!(service.extract_username(&token).unwrap(), "carol");
}

#[test]
fn test_different_secret_fails_validation() {
    let issuer = service_with_secret("first-secret-value-first-secret-value", 60_000);
    let verifier = service_with_secret("second-secret-value-second-secret-value", 60_000);

    let token = issuer.issue("alice", 42).unwrap();

    assert!(issuer.validate(&token));
    assert!(!verifier.validate(&token));
    assert!(matches!(
        verifier.extract_username(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_expired_token_fails_validate() {
    let secret = "expired-token-test-secret";
    let service = service_with_secret(secret, 60_000);

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "alice".to_string(),
        user_id: Some(42),
        iat: now - 120,
        exp: now - 60,
    };
    let token = forge_token(secret, &claims);

    assert!(!service.validate(&token));
    assert!(matches!(
        service.extract_username(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_near_zero_expiration_elapses() {
    let service = service_with_secret("near-zero-expiry-secret", 1);
    let token = service.issue("alice", 42).unwrap();

    // `exp` has one-second resolution, so wait out the worst case
    thread::sleep(StdDuration::from_millis(2100));

    assert!(!service.validate(&token));
}

#[test]
fn test_corrupted_signature_fails_validate() {
    let service = service_with_secret("corruption-test-secret-corruption-test", 60_000);
    let token = service.issue("alice", 42).unwrap();

    let dot = token.rfind('.').unwrap();
    let (head, signature) = token.split_at(dot + 1);
    // Flip the first character of the signature segment; its bits are
    // all significant, so the decoded MAC always changes
    let first = signature.chars().next().unwrap();
    let flipped = if first == 'A' { 'B' } else { 'A' };
    let corrupted = format!("{head}{flipped}{}", &signature[1..]);

    assert!(service.validate(&token));
    assert!(!service.validate(&corrupted));
}

#[test]
fn test_garbage_token_is_invalid_format() {
    let service = service_with_secret("garbage-token-test-secret", 60_000);

    assert!(!service.validate("not-a-token"));
    assert!(!service.validate(""));
    assert!(matches!(
        service.extract_user_id("not-a-token"),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[test]
fn test_missing_user_id_claim() {
    let secret = "missing-claim-test-secret";
    let service = service_with_secret(secret, 60_000);

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "legacy-user".to_string(),
        user_id: None,
        iat: now,
        exp: now + 3600,
    };
    let token = forge_token(secret, &claims);

    // Signature and expiry are fine, so the predicate still holds
    assert!(service.validate(&token));
    assert_eq!(service.extract_username(&token).unwrap(), "legacy-user");
    assert!(matches!(
        service.extract_user_id(&token),
        Err(DomainError::Token(TokenError::MissingClaim { claim })) if claim == "userId"
    ));
}

#[test]
fn test_ephemeral_key_service() {
    let service = TokenService::with_signing_key(SigningKey::ephemeral(), 60_000).unwrap();

    let token = service.issue("alice", 42).unwrap();

    assert!(service.is_degraded());
    assert!(service.validate(&token));
    assert_eq!(service.extract_user_id(&token).unwrap(), 42);
}

#[test]
fn test_derived_key_service_is_not_degraded() {
    let service = service_with_secret("abc", 60_000);
    assert!(!service.is_degraded());
}

#[test]
fn test_expires_in_seconds() {
    let service = service_with_secret("abc", 86_400_000);
    assert_eq!(service.expires_in_seconds(), 86_400);
}

#[test]
fn test_non_positive_expiration_rejected() {
    for expiration_ms in [0, -1] {
        let result = TokenService::new(TokenServiceConfig {
            secret: "abc".to_string(),
            secret_encoding: SecretEncoding::Auto,
            expiration_ms,
        });
        assert!(result.is_err());
    }
}

#[test]
fn test_token_has_three_segments() {
    let service = service_with_secret("abc", 60_000);
    let token = service.issue("alice", 42).unwrap();

    assert_eq!(token.split('.').count(), 3);
}
