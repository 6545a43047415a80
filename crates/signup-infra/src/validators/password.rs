//! Password strength checker.

use signup_core::error::CheckerError;
use signup_core::ports::PasswordValidator;

/// Character classes a password has to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

/// Checks passwords against a [`PasswordPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PasswordStrengthValidator {
    policy: PasswordPolicy,
}

impl PasswordStrengthValidator {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }
}

impl PasswordValidator for PasswordStrengthValidator {
    fn is_valid(&self, password: &str) -> Result<bool, CheckerError> {
        let policy = &self.policy;

        // Length in characters, not bytes.
        if password.chars().count() < policy.min_length {
            return Ok(false);
        }

        let has = |predicate: fn(char) -> bool| password.chars().any(predicate);

        Ok((!policy.require_lowercase || has(char::is_lowercase))
            && (!policy.require_uppercase || has(char::is_uppercase))
            && (!policy.require_digit || has(|c| c.is_ascii_digit()))
            && (!policy.require_symbol || has(|c| !c.is_alphanumeric() && !c.is_whitespace())))
    }
}
