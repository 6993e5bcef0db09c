//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather endpoint could not be reached
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The weather endpoint answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be parsed
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The page view could not be bound or updated
    #[error("View error: {0}")]
    View(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_transparent() {
        let err: ApplicationError = DomainError::invalid_class_token("a b", "contains whitespace").into();
        assert_eq!(
            err.to_string(),
            "Invalid class token \"a b\": contains whitespace"
        );
    }

    #[test]
    fn status_error_message() {
        let err = ApplicationError::UnexpectedStatus(500);
        assert_eq!(err.to_string(), "Unexpected HTTP status: 500");
    }
}
