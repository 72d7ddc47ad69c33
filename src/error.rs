use thiserror::Error;

use crate::name::Namon;

#[derive(Debug, Error)]
pub enum NameError {
    /// Input had the wrong shape or arity before any content was inspected:
    /// token count outside the accepted range, a missing mandatory map key,
    /// a duplicated typed part, and so on.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A token's content failed one of the grammar rules.
    #[error("invalid {kind}: '{token}' does not match the {rule} rule")]
    Validation {
        kind: Namon,
        token: String,
        rule: &'static str,
    },

    /// An operation was attempted in a state that forbids it, e.g. editing a
    /// finalized builder or rendering a maternal surname that was never set.
    #[error("operation '{operation}' is not allowed: {message}")]
    NotAllowed {
        operation: &'static str,
        message: String,
    },

    #[error("failed to read JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl NameError {
    /// Create an input-shape error with context
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a content validation error for a specific name part
    pub fn validation(kind: Namon, token: impl Into<String>, rule: &'static str) -> Self {
        Self::Validation {
            kind,
            token: token.into(),
            rule,
        }
    }

    /// Create a forbidden-operation error
    pub fn not_allowed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::NotAllowed {
            operation,
            message: message.into(),
        }
    }

    /// Check if the error comes from content validation rather than shape
    pub fn is_validation(&self) -> bool {
        matches!(self, NameError::Validation { .. })
    }
}
