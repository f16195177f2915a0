//! Shared error types for configuration loading.

use thiserror::Error;

/// Errors raised while loading configuration at startup.
///
/// These are deliberately fatal: a missing or unparseable JWT setting must
/// stop the process before the server binds, never surface per-request.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVar { name: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: String, reason: String },
}
