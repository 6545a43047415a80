//! Account storage: connection management and repositories.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryAccountRepository;

#[cfg(feature = "postgres")]
pub use connections::DatabaseHandle;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresAccountRepository;
