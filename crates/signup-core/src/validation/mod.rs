//! Request validation: atomic units and the composite that chains them.

mod compare;
mod composite;
mod email;
mod password;
mod required;

pub use compare::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use password::PasswordValidation;
pub use required::RequiredFieldValidation;
