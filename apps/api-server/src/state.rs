//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use signup_core::ports::AccountRepository;
use signup_core::presentation::SignUpController;
use signup_infra::{DatabaseConfig, InMemoryAccountRepository};

#[cfg(feature = "postgres")]
use signup_infra::{DatabaseHandle, PostgresAccountRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sign_up: Arc<SignUpController>,
}

impl AppState {
    pub fn new(sign_up: SignUpController) -> Self {
        Self {
            sign_up: Arc::new(sign_up),
        }
    }
}

/// Backing store for accounts, owned by `main` for the lifetime of the server.
pub enum Storage {
    InMemory(Arc<InMemoryAccountRepository>),
    #[cfg(feature = "postgres")]
    Postgres(DatabaseHandle),
}

impl Storage {
    /// Connect to the configured database, or fall back to memory when none is set.
    pub async fn connect(config: Option<&DatabaseConfig>) -> io::Result<Self> {
        match config {
            #[cfg(feature = "postgres")]
            Some(config) => {
                let handle = DatabaseHandle::connect(config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    io::Error::other(e)
                })?;
                Ok(Self::Postgres(handle))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!(
                    "DATABASE_URL is set but the postgres feature is disabled. Using in-memory storage."
                );
                Ok(Self::in_memory())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryAccountRepository::new()))
    }

    pub fn repository(&self) -> Arc<dyn AccountRepository> {
        match self {
            Self::InMemory(repo) => repo.clone(),
            #[cfg(feature = "postgres")]
            Self::Postgres(handle) => Arc::new(PostgresAccountRepository::new(handle.clone())),
        }
    }

    /// Release the database connection, if any.
    pub async fn disconnect(self) -> io::Result<()> {
        match self {
            Self::InMemory(_) => Ok(()),
            #[cfg(feature = "postgres")]
            Self::Postgres(handle) => handle.disconnect().await.map_err(io::Error::other),
        }
    }
}
