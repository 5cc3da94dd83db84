//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A caller-supplied argument is outside the range the operation accepts
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: &'static str,
    },
}

impl TextError {
    pub(crate) fn invalid_argument(parameter: &'static str, message: &'static str) -> Self {
        TextError::InvalidArgument { parameter, message }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            TextError::InvalidArgument { parameter, .. } => *parameter,
        }
    }

    /// Check if this error represents a rejected argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TextError::InvalidArgument { .. })
    }
}
