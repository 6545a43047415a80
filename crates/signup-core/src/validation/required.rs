use crate::domain::{Field, RegistrationInput};
use crate::error::{CheckerError, ValidationError};
use crate::ports::Validation;

/// Rejects a request whose `field` is absent or empty.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFieldValidation {
    field: Field,
}

impl RequiredFieldValidation {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        match input.get(self.field) {
            Some(value) if !value.is_empty() => Ok(None),
            _ => Ok(Some(ValidationError::MissingParameter(self.field))),
        }
    }
}
