use crate::domain::{Field, RegistrationInput};
use crate::error::{CheckerError, ValidationError};
use crate::ports::Validation;

/// Rejects a request whose two fields differ, blaming `field_to_compare`.
#[derive(Debug, Clone, Copy)]
pub struct CompareFieldsValidation {
    field: Field,
    field_to_compare: Field,
}

impl CompareFieldsValidation {
    pub fn new(field: Field, field_to_compare: Field) -> Self {
        Self {
            field,
            field_to_compare,
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        if input.get(self.field) != input.get(self.field_to_compare) {
            return Ok(Some(ValidationError::InvalidParameter(
                self.field_to_compare,
            )));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::valid_input;

    fn sut() -> CompareFieldsValidation {
        CompareFieldsValidation::new(Field::Password, Field::PasswordConfirmation)
    }

    #[test]
    fn test_passes_when_fields_match() {
        assert_eq!(sut().validate(&valid_input()), Ok(None));
    }

    #[test]
    fn test_rejects_mismatch_on_compared_field() {
        let input = RegistrationInput {
            password_confirmation: Some("invalid_confirmation_senha".to_string()),
            ..valid_input()
        };

        assert_eq!(
            sut().validate(&input),
            Ok(Some(ValidationError::InvalidParameter(
                Field::PasswordConfirmation
            )))
        );
    }

    #[test]
    fn test_rejects_when_only_one_side_is_present() {
        let input = valid_input().without(Field::PasswordConfirmation);

        assert_eq!(
            sut().validate(&input),
            Ok(Some(ValidationError::InvalidParameter(
                Field::PasswordConfirmation
            )))
        );
    }
}
