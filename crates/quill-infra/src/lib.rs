//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - Argon2 password hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
