#[cfg(feature = "postgres")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the account database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Connection pool handle with an explicit lifecycle.
///
/// Created once with [`DatabaseHandle::connect`] at start-up, cloned into the
/// repositories that need it and closed with [`DatabaseHandle::disconnect`]
/// on shutdown. Repositories never reconnect on their own.
///
/// Clones share one pool through an `Arc`, since `DbConn` itself is not
/// `Clone` when sea-orm's `mock` feature is enabled.
#[cfg(feature = "postgres")]
#[derive(Debug, Clone)]
pub struct DatabaseHandle {
    conn: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseHandle {
    /// Open the pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(pool = config.max_connections, "Database connected");

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// Wrap an existing connection, e.g. a mock one in tests.
    pub fn from_connection(conn: DbConn) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    pub fn connection(&self) -> &DbConn {
        &self.conn
    }

    /// Close the pool. Clones of this handle stop working afterwards.
    pub async fn disconnect(self) -> Result<(), DbErr> {
        self.conn.close_by_ref().await?;
        tracing::info!("Database disconnected");
        Ok(())
    }
}
