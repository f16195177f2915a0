use actix_web::{web, HttpResponse};

use bv_core::repositories::UserRepository;

use crate::dto::auth::ProfileResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /api/profile
///
/// Returns the account of the authenticated user. The JWT middleware has
/// already validated the bearer token and resolved the identity.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": 42,
///     "username": "alice",
///     "email": "alice@example.com"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or expired token
/// - 404 Not Found: The account no longer exists
pub async fn profile<U>(state: web::Data<AppState<U>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
{
    match state.auth_service.profile(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        }),
        Err(error) => handle_domain_error(error),
    }
}
