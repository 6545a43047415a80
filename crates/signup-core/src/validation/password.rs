use std::sync::Arc;

use crate::domain::{Field, RegistrationInput};
use crate::error::{CheckerError, ValidationError};
use crate::ports::{PasswordValidator, Validation};

/// Delegates the strength check of `field` to a [`PasswordValidator`].
#[derive(Clone)]
pub struct PasswordValidation {
    field: Field,
    password_validator: Arc<dyn PasswordValidator>,
}

impl PasswordValidation {
    pub fn new(field: Field, password_validator: Arc<dyn PasswordValidator>) -> Self {
        Self {
            field,
            password_validator,
        }
    }
}

impl Validation for PasswordValidation {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        let Some(password) = input.get(self.field) else {
            return Ok(Some(ValidationError::InvalidParameter(self.field)));
        };

        if self.password_validator.is_valid(password)? {
            Ok(None)
        } else {
            Ok(Some(ValidationError::InvalidParameter(self.field)))
        }
    }
}
