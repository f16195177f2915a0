//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows the known local frontend ports; production
//! restricts origins to the configured domains.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use bv_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the application configuration.
///
/// The web client sends the session token in the Authorization header
/// and relies on credentialed requests, so both are allowed here.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
