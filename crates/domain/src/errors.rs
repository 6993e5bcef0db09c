//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Location identifier is empty or otherwise unusable
    #[error("Invalid location id: {0:?}")]
    InvalidLocationId(String),

    /// Value cannot be used as a CSS class token
    #[error("Invalid class token {token:?}: {reason}")]
    InvalidClassToken {
        token: String,
        reason: &'static str,
    },
}

impl DomainError {
    /// Create an invalid class token error
    pub fn invalid_class_token(token: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidClassToken {
            token: token.into(),
            reason,
        }
    }
}
