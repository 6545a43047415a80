use std::sync::Arc;

use crate::domain::{Field, RegistrationInput};
use crate::error::{CheckerError, ValidationError};
use crate::ports::{EmailValidator, PasswordValidator, Validation};

use super::{
    CompareFieldsValidation, EmailValidation, PasswordValidation, RequiredFieldValidation,
};

/// Runs validations in order and stops at the first rejection.
///
/// Errors are never aggregated: the result is the first unit's rejection, or
/// `None` when every unit passes. Units after a rejecting or failing one are
/// not invoked.
#[derive(Clone, Default)]
pub struct ValidationComposite {
    validations: Vec<Arc<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Arc<dyn Validation>>) -> Self {
        Self { validations }
    }

    /// The sign-up pipeline: required fields, password confirmation, email
    /// format, password strength.
    pub fn sign_up(
        email_validator: Arc<dyn EmailValidator>,
        password_validator: Arc<dyn PasswordValidator>,
    ) -> Self {
        let mut validations: Vec<Arc<dyn Validation>> = [
            Field::Name,
            Field::Email,
            Field::Password,
            Field::PasswordConfirmation,
        ]
        .into_iter()
        .map(|field| Arc::new(RequiredFieldValidation::new(field)) as Arc<dyn Validation>)
        .collect();

        validations.push(Arc::new(CompareFieldsValidation::new(
            Field::Password,
            Field::PasswordConfirmation,
        )));
        validations.push(Arc::new(EmailValidation::new(Field::Email, email_validator)));
        validations.push(Arc::new(PasswordValidation::new(
            Field::Password,
            password_validator,
        )));

        Self::new(validations)
    }

    pub fn len(&self) -> usize {
        self.validations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input)? {
                return Ok(Some(error));
            }
        }
        Ok(None)
    }
}
