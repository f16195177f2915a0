//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware strips the `Bearer ` prefix from the Authorization
//! header, checks the token with the token service's boolean predicate,
//! then recovers the identity through the extraction accessors and
//! injects it into the request extensions.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use bv_core::services::token::TokenService;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Numeric user identifier from the token's `userId` claim
    pub user_id: i64,
    /// Username from the token's subject claim
    pub username: String,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by the given
    /// token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            if !token_service.validate(&token) {
                return Err(ErrorUnauthorized("Invalid or expired token"));
            }

            // The predicate passed, so the accessors only fail for a
            // token missing its identity claims
            let username = token_service
                .extract_username(&token)
                .map_err(|e| ErrorUnauthorized(format!("Invalid token: {e}")))?;
            let user_id = token_service
                .extract_user_id(&token)
                .map_err(|e| ErrorUnauthorized(format!("Invalid token: {e}")))?;

            req.extensions_mut().insert(AuthContext { user_id, username });

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
