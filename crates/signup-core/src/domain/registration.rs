use std::fmt;

use super::AddAccountModel;
use crate::error::ValidationError;

/// The fields a registration request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Name of the field on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Password => "senha",
            Field::PasswordConfirmation => "senhaConfirme",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration fields as submitted. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password_confirmation.into()),
        }
    }

    /// Value of `field`, if it was submitted.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::PasswordConfirmation => self.password_confirmation.as_deref(),
        }
    }

    /// Returns a copy with `field` removed.
    pub fn without(mut self, field: Field) -> Self {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::PasswordConfirmation => self.password_confirmation = None,
        }
        self
    }

    /// Converts validated input into the use case model.
    ///
    /// The confirmation only exists for the equality check and is dropped here.
    pub fn into_account_model(self) -> Result<AddAccountModel, ValidationError> {
        let name = self
            .name
            .ok_or(ValidationError::MissingParameter(Field::Name))?;
        let email = self
            .email
            .ok_or(ValidationError::MissingParameter(Field::Email))?;
        let password = self
            .password
            .ok_or(ValidationError::MissingParameter(Field::Password))?;

        Ok(AddAccountModel {
            name,
            email,
            password,
        })
    }
}
