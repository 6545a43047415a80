//! Domain entities - the core business objects.

mod account;
mod registration;

pub use account::{Account, AddAccountModel};
pub use registration::{Field, RegistrationInput};
