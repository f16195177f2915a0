//! Translation of domain errors into transport responses.

use actix_web::{http::StatusCode, HttpResponse};

use bv_core::errors::{AuthError, DomainError};
use bv_shared::types::response::ErrorResponse;

/// Maps a domain error to the HTTP response contract.
///
/// Credential failures and token errors become 401, duplicate and
/// validation failures 400, missing resources 404, everything else 500.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = match &error {
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::UserNotFound) | DomainError::NotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        DomainError::Auth(_) => StatusCode::BAD_REQUEST,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("API error: {error}");
    }

    let response: ErrorResponse = error.into();
    HttpResponse::build(status).json(response)
}
