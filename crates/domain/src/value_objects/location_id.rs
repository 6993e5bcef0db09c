//! Location identifier value object
//!
//! An opaque token naming a place. It is embedded verbatim into the
//! request path, so the only rule is that it must not be empty.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::LocationId;
//!
//! let id = LocationId::new("42").expect("non-empty id");
//! assert_eq!(id.as_str(), "42");
//!
//! // Falsy inputs never produce an id
//! assert!(LocationId::new("").is_none());
//! assert!(LocationId::from_number(0).is_none());
//! assert!(LocationId::from_optional(None).is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a location known to the weather endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationId(String);

impl LocationId {
    /// Create a location id, returning `None` for an empty identifier
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Create a location id from a numeric primary key
    ///
    /// Zero is treated as "no location".
    pub fn from_number(id: i64) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// Create a location id from an optional raw value
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::new)
    }

    /// Get the identifier as it will appear in the request path
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| DomainError::InvalidLocationId(s.to_string()))
    }
}

impl TryFrom<String> for LocationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(DomainError::InvalidLocationId(value));
        }
        Ok(Self(value))
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        id.0
    }
}
