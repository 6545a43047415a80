//! # Signup Core
//!
//! The domain layer of the signup backend.
//! This crate contains the validation pipeline, the use case ports and the
//! framework-agnostic sign-up controller. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod presentation;
pub mod usecases;
pub mod validation;

pub use error::{CheckerError, DomainError, ServerError, ValidationError};

#[cfg(test)]
mod test_support;
