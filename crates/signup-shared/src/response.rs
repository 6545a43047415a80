//! Error body of the signup API.

use serde::{Deserialize, Serialize};

/// Error envelope: `name` identifies the problem (the offending field, or
/// `ServerError`) and `message` describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}
