//! Email format checker backed by the `validator` crate.

use validator::ValidateEmail;

use signup_core::error::CheckerError;
use signup_core::ports::EmailValidator;

/// HTML5-style email format check.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormatValidator;

impl EmailFormatValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailFormatValidator {
    fn is_valid(&self, email: &str) -> Result<bool, CheckerError> {
        Ok(email.validate_email())
    }
}
