//! Token service module for session token management
//!
//! This module handles all token-related operations including:
//! - Deriving the HMAC-SHA256 signing key from the configured secret
//! - Issuing signed session tokens
//! - Validating tokens and extracting identity claims

mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{KeySource, SecretEncoding, SigningKey, MIN_KEY_BYTES};
