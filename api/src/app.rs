//! Application factory
//!
//! Builds the Actix-web application with all routes, middleware and
//! shared state wired together.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use bv_core::repositories::UserRepository;
use bv_core::services::token::TokenService;
use bv_shared::config::CorsConfig;
use bv_shared::types::response::{error_codes, ErrorResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, profile::profile, register::register, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    state: web::Data<AppState<U>>,
    token_service: Arc<TokenService>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        // Add application state
        .app_data(state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes; paths match the deployed web client
        .service(
            web::scope("/api")
                .route("/auth/login", web::post().to(login::<U>))
                .route("/register", web::post().to(register::<U>))
                .service(
                    web::scope("/profile")
                        .wrap(JwtAuth::new(token_service))
                        .route("", web::get().to(profile::<U>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bookvault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
