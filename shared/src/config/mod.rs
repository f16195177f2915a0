//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT secret and token lifetime configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The JWT settings are mandatory and fail fast when missing or
    /// unparseable; server settings fall back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            cors: CorsConfig::for_environment(environment),
            logging: LoggingConfig::for_environment(environment),
        })
    }
}
