//! CSS class token value object
//!
//! Mirrors the rules a DOM token list applies when a class is added:
//! the token must be non-empty and must not contain ASCII whitespace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single class name that can be placed on a page element
///
/// # Examples
///
/// ```
/// use domain::value_objects::ClassToken;
///
/// let token = ClassToken::new("sunny").expect("valid token");
/// assert_eq!(token.as_str(), "sunny");
/// assert!(ClassToken::new("heavy rain").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassToken(String);

impl ClassToken {
    /// Create a validated class token
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClassToken` for an empty token or one
    /// containing ASCII whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::invalid_class_token(raw, "empty"));
        }
        if raw.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(DomainError::invalid_class_token(raw, "contains whitespace"));
        }
        Ok(Self(raw))
    }

    /// Get the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClassToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClassToken> for String {
    fn from(token: ClassToken) -> Self {
        token.0
    }
}

impl AsRef<str> for ClassToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
