//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::PostRepository;
use folio_core::service::{PostService, SharedSecret};
use folio_infra::InMemoryPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use folio_infra::{DatabaseConnections, PostgresPostRepository};

/// Failures while building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[cfg(feature = "postgres")]
    #[error("Failed to connect to database: {0}")]
    Database(String),
}

/// Shared application state.
///
/// Built once at startup; the database pool inside the repository is reused
/// by every request.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StateError> {
        let secret = SharedSecret::from(config.secret_pw.clone());
        if !secret.is_configured() {
            tracing::warn!("SECRET_PW not set. All write requests will be rejected.");
        }

        let repo = Self::repository(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(repo, secret))
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, secret: SharedSecret) -> Self {
        Self {
            posts: PostService::new(repo, secret),
        }
    }

    #[cfg(feature = "postgres")]
    async fn repository(config: &AppConfig) -> Result<Arc<dyn PostRepository>, StateError> {
        match &config.database {
            Some(db_config) => {
                let connections = DatabaseConnections::init(db_config)
                    .await
                    .map_err(|e| StateError::Database(e.to_string()))?;
                Ok(Arc::new(PostgresPostRepository::new(connections.main)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Arc::new(InMemoryPostRepository::new()))
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repository(config: &AppConfig) -> Result<Arc<dyn PostRepository>, StateError> {
        if config.database.is_some() {
            tracing::warn!("Built without postgres feature - DATABASE_URL is ignored");
        }
        tracing::info!("Using in-memory post repository");
        Ok(Arc::new(InMemoryPostRepository::new()))
    }
}
