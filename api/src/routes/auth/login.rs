use actix_web::{web, HttpResponse};
use validator::Validate;

use bv_core::repositories::UserRepository;
use bv_shared::types::response::{error_codes, ErrorResponse};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /api/auth/login
///
/// Verifies the credentials and returns a signed session token.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Login successful",
///     "token": "eyJ...",
///     "userId": 42,
///     "username": "alice",
///     "expires_in": 86400
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed request body
/// - 401 Unauthorized: Unknown username or wrong password
/// - 500 Internal Server Error: Token issuance or hashing failure
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, errors.to_string()));
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            token: auth.token,
            user_id: auth.user_id,
            username: auth.username,
            expires_in: auth.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
