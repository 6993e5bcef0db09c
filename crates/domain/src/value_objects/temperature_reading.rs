//! Temperature reading value object
//!
//! The endpoint reports temperature as a number or as preformatted text.
//! The widget never interprets the value; it only renders it, using the
//! same text conversion a browser applies when a value is placed in a
//! template string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// A temperature value exactly as reported by the endpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TemperatureReading {
    /// Numeric reading, kept with its original JSON representation
    Number(Number),
    /// Text reading, rendered verbatim
    Text(String),
    /// The field was not sent at all
    #[default]
    Absent,
    /// The field was sent as `null`
    Null,
    /// Any other JSON value
    Other(Value),
}

impl TemperatureReading {
    /// Build a reading from an arbitrary JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            Value::Null => Self::Null,
            other => Self::Other(other),
        }
    }

    /// Build a reading from an object field that may be missing
    pub fn from_field(value: Option<Value>) -> Self {
        value.map_or(Self::Absent, Self::from_value)
    }

    /// Text shown in the temperature display
    pub fn display_text(&self) -> String {
        self.to_string()
    }

    /// Whether the field was missing from the report
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Render a number the way ECMAScript `Number::toString` does
///
/// Integers that JSON carried without a fraction stay exact, even beyond
/// the `f64` range of exact integers.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64()
        .map_or_else(|| n.to_string(), |f| ryu_js::Buffer::new().format(f).to_string())
}

/// Convert a JSON value to text with template-string rules
fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        // Array join renders null holes as empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&number_text(n)),
            Self::Text(s) => f.write_str(s),
            Self::Absent => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Other(v) => f.write_str(&coerce(v)),
        }
    }
}

impl From<Value> for TemperatureReading {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for TemperatureReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => n.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Absent | Self::Null => serializer.serialize_unit(),
            Self::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TemperatureReading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
