//! Weather report entity
//!
//! One report is created per fetch, handed to the view update and then
//! dropped. Nothing is cached between requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DomainError;
use crate::value_objects::{ClassToken, TemperatureReading};

/// Weather data for a single location as returned by the endpoint
///
/// Neither field is validated when the report is built. The weather label
/// is only checked when it is turned into a class token. Only a JSON object
/// is accepted as a report; a missing `temp` is kept apart from a `null` one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct WeatherReport {
    /// Temperature, rendered verbatim
    #[serde(skip_serializing_if = "TemperatureReading::is_absent")]
    pub temp: TemperatureReading,

    /// Weather label used as a CSS class on the background element
    pub weather: Option<String>,
}

impl TryFrom<Map<String, Value>> for WeatherReport {
    type Error = String;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let weather = match body.remove("weather") {
            None | Some(Value::Null) => None,
            Some(Value::String(label)) => Some(label),
            Some(other) => {
                return Err(format!("invalid type for weather: {other}, expected a string"));
            },
        };

        Ok(Self {
            temp: TemperatureReading::from_field(body.remove("temp")),
            weather,
        })
    }
}

impl WeatherReport {
    /// Create a report from its two parts
    pub fn new(temp: impl Into<TemperatureReading>, weather: Option<String>) -> Self {
        Self {
            temp: temp.into(),
            weather,
        }
    }

    /// Text for the temperature display
    pub fn temperature_text(&self) -> String {
        self.temp.display_text()
    }

    /// The weather label as a class token
    ///
    /// Returns `Ok(None)` when the endpoint sent no label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClassToken` when the label is present but
    /// cannot be used as a class.
    pub fn weather_class(&self) -> Result<Option<ClassToken>, DomainError> {
        self.weather.as_deref().map(ClassToken::new).transpose()
    }
}
