//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::AuthGate;
use quill_core::ports::{PasswordService, PostRepository, UserRepository};
use quill_infra::{
    Argon2PasswordService, DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
use quill_infra::{PostgresPostRepository, PostgresUserRepository, database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state, falling back to in-memory storage without a database.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => Self::with_repositories(
                    Arc::new(PostgresUserRepository::new(conn.clone())),
                    Arc::new(PostgresPostRepository::new(conn)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by process-local repositories.
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    fn with_repositories(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            users,
            posts,
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    pub fn gate(&self) -> AuthGate<'_> {
        AuthGate::new(self.users.as_ref())
    }
}
