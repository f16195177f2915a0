//! Repository interfaces for data access.

pub mod user;

pub use user::{InMemoryUserRepository, UserRepository};
