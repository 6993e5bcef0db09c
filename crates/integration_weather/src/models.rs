//! Wire models for the `get_weather` endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON body returned by the endpoint
///
/// Only a JSON object is a valid body. Both fields are optional on the wire;
/// `temp` is kept as raw JSON because the endpoint may send a number or
/// preformatted text, and `None` means the field was not sent at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct WeatherPayload {
    /// Temperature reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<Value>,

    /// Weather label, used as a CSS class by the page
    pub weather: Option<String>,
}

impl TryFrom<Map<String, Value>> for WeatherPayload {
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
            temp: body.remove("temp"),
            weather,
        })
    }
}
