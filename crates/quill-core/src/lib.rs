//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! Users, posts, the session payload and the login/ownership gate live here,
//! with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod gate;
pub mod ports;
pub mod session;

pub use error::DomainError;
pub use gate::AuthGate;
pub use session::SessionState;
