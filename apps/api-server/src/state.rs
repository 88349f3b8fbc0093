//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogRepository, UserRepository};
use quill_infra::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "postgres")]
use quill_infra::database::connect;
#[cfg(feature = "postgres")]
use quill_infra::{PostgresBlogRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match connect(config).await {
                Ok(conn) => Self {
                    users: Arc::new(PostgresUserRepository::new(conn.clone())),
                    blogs: Arc::new(PostgresBlogRepository::new(conn)),
                },
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
            if db_config.is_some() {
                tracing::warn!("Built without the postgres feature; DATABASE_URL is ignored");
            }
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        let (users, blogs) = InMemoryStore::repositories();
        Self {
            users: Arc::new(users),
            blogs: Arc::new(blogs),
        }
    }
}
