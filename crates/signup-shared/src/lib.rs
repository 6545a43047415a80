//! # Signup Shared
//!
//! Wire types of the signup API, shared between the server and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
