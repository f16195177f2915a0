use actix_web::{web, HttpResponse};
use validator::Validate;

use bv_core::repositories::UserRepository;
use bv_shared::types::response::{error_codes, ErrorResponse};

use crate::dto::auth::{MessageResponse, RegisterRequest};
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /api/register
///
/// Creates a new account after checking for duplicate usernames and
/// email addresses.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "email": "alice@example.com",
///     "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Registration successful" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid input, or username/email already exists
/// - 500 Internal Server Error: Password hashing failure
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
