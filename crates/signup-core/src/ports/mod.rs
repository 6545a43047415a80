//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod account;
mod crypto;
mod repository;
mod validation;

pub use account::AddAccount;
pub use crypto::PasswordService;
pub use repository::AccountRepository;
pub use validation::{EmailValidator, PasswordValidator, Validation};
