//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load server settings from `SERVER_HOST` / `SERVER_PORT`, falling
    /// back to development defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            workers: defaults.workers,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Allow credentials (cookies, authorization headers)
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                String::from("http://localhost:3000"),
                String::from("http://localhost:4000"),
            ],
            allow_credentials: default_allow_credentials(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create CORS configuration for the given environment.
    ///
    /// Development keeps the local frontend ports; production reads the
    /// comma-separated `ALLOWED_ORIGINS` variable.
    pub fn for_environment(env: Environment) -> Self {
        if !env.is_production() {
            return Self::default();
        }

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            allowed_origins,
            ..Default::default()
        }
    }
}

fn default_allow_credentials() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_cors_defaults_include_frontend_ports() {
        let config = CorsConfig::default();
        assert!(config
            .allowed_origins
            .contains(&"http://localhost:3000".to_string()));
        assert!(config.allow_credentials);
    }
}
