//! Domain-level error types.

use thiserror::Error;

use crate::domain::Field;

/// Expected validation failures - surfaced to the client as 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParameter(Field),

    #[error("Invalid param: {0}")]
    InvalidParameter(Field),
}

impl ValidationError {
    /// The field the failure is about.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingParameter(field) | ValidationError::InvalidParameter(field) => {
                *field
            }
        }
    }
}

/// Unexpected failure of a capability checker (email format, password strength).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{checker} failed: {reason}")]
pub struct CheckerError {
    pub checker: &'static str,
    pub reason: String,
}

impl CheckerError {
    pub fn new(checker: &'static str, reason: impl Into<String>) -> Self {
        Self {
            checker,
            reason: reason.into(),
        }
    }
}

/// Generic marker returned to clients on any unexpected failure.
///
/// Carries no detail about the underlying cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("Internal server error")]
pub struct ServerError;

impl ServerError {
    pub const NAME: &'static str = "ServerError";
}

/// Domain errors - business logic failures of the use cases.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Email already in use")]
    EmailInUse,

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}
