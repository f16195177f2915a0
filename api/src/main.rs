use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use bv_api::app::create_app;
use bv_api::routes::auth::AppState;
use bv_core::repositories::InMemoryUserRepository;
use bv_core::services::auth::AuthService;
use bv_core::services::token::{SecretEncoding, TokenService, TokenServiceConfig};
use bv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Missing or invalid JWT settings must stop the process here, before
    // the server binds
    let config = AppConfig::from_env().expect("invalid configuration");

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.clone()),
    );

    info!("Starting BookVault API server ({})", config.environment);
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is the development default; set a real secret in production");
    }

    let token_config = TokenServiceConfig {
        secret: config.jwt.secret.clone(),
        secret_encoding: config
            .jwt
            .secret_encoding
            .parse::<SecretEncoding>()
            .expect("invalid JWT_SECRET_ENCODING"),
        expiration_ms: config.jwt.expiration_ms,
    };
    let token_service =
        Arc::new(TokenService::new(token_config).expect("failed to initialize token service"));

    let auth_service = Arc::new(AuthService::new(
        InMemoryUserRepository::new(),
        Arc::clone(&token_service),
    ));
    let state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        create_app(state.clone(), Arc::clone(&token_service), &cors_config)
    })
    .bind(&bind_address)?
    .run()
    .await
}
