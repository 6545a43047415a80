//! Validation ports.

use crate::domain::RegistrationInput;
use crate::error::{CheckerError, ValidationError};

/// A single check over a registration request.
///
/// `Ok(Some(_))` is an expected rejection, `Ok(None)` a pass. `Err(_)` means the
/// check itself failed and must reach the caller untouched.
pub trait Validation: Send + Sync {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError>;
}

/// Email format checker.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, CheckerError>;
}

/// Password strength checker.
pub trait PasswordValidator: Send + Sync {
    fn is_valid(&self, password: &str) -> Result<bool, CheckerError>;
}
