//! Validation error types

use std::fmt;

/// Validation error for request input and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body could not be decoded into the expected shape
    MalformedBody { reason: String },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedBody {
            reason: e.to_string(),
        }
    }
}
