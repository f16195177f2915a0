//! Domain-specific error types for authentication and token operations.
//!
//! Error messages here are the canonical English strings; the API layer
//! maps each variant to a transport status and error code.

use bv_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Uniform failure for unknown usernames and wrong passwords so the
    /// response does not leak which one was wrong
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
///
/// Raised by the extraction accessors of the token service; the boolean
/// `validate` predicate folds all of these into `false`.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UsernameTaken => "USERNAME_TAKEN",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::UserNotFound => "USER_NOT_FOUND",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
