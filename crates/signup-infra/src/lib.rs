//! # Signup Infrastructure
//!
//! Concrete implementations of the ports defined in `signup-core`:
//! password hashing, email and password checkers, and account storage.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL account storage via SeaORM

pub mod crypto;
pub mod database;
pub mod validators;

pub use crypto::Argon2PasswordService;
pub use database::{DatabaseConfig, InMemoryAccountRepository};
pub use validators::{EmailFormatValidator, PasswordPolicy, PasswordStrengthValidator};

#[cfg(feature = "postgres")]
pub use database::{DatabaseHandle, PostgresAccountRepository};
