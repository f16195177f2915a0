//! # BookVault Core
//!
//! Core business logic and domain layer for the BookVault backend.
//! This crate contains domain entities, the token and authentication
//! services, repository interfaces, and error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::{DomainError, DomainResult};
pub use services::{AuthService, TokenService, TokenServiceConfig};
