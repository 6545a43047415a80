//! Password hashing port.

use crate::error::CryptoError;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, CryptoError>;
}
