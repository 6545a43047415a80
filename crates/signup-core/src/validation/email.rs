use std::sync::Arc;

use crate::domain::{Field, RegistrationInput};
use crate::error::{CheckerError, ValidationError};
use crate::ports::{EmailValidator, Validation};

/// Delegates the format check of `field` to an [`EmailValidator`].
///
/// A checker error is returned as-is; it is not turned into a rejection.
#[derive(Clone)]
pub struct EmailValidation {
    field: Field,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field: Field, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field,
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        let Some(email) = input.get(self.field) else {
            return Ok(Some(ValidationError::InvalidParameter(self.field)));
        };

        if self.email_validator.is_valid(email)? {
            Ok(None)
        } else {
            Ok(Some(ValidationError::InvalidParameter(self.field)))
        }
    }
}
