//! Capability checkers used by the validation pipeline.

mod email;
mod password;

pub use email::EmailFormatValidator;
pub use password::{PasswordPolicy, PasswordStrengthValidator};
