//! Weather adapter - Implements WeatherSourcePort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherSourcePort;
use async_trait::async_trait;
use domain::{LocationId, TemperatureReading, WeatherReport};
use integration_weather::{
    SameOriginClient, WeatherClient, WeatherConfig, WeatherError, WeatherPayload,
};
use tracing::{debug, instrument};

/// Adapter fetching weather reports from the page's own origin
#[derive(Debug)]
pub struct WeatherAdapter {
    client: SameOriginClient,
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is invalid or the HTTP client fails to
    /// initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = SameOriginClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Origin requests are sent to
    pub fn origin(&self) -> &str {
        self.client.origin()
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherError::UnexpectedStatus(status) => ApplicationError::UnexpectedStatus(status),
            WeatherError::ParseError(e) => ApplicationError::MalformedResponse(e),
            WeatherError::InvalidOrigin(e) => ApplicationError::Configuration(e),
        }
    }

    /// Convert the wire payload into a domain report
    fn map_payload(payload: WeatherPayload) -> WeatherReport {
        WeatherReport::new(TemperatureReading::from_field(payload.temp), payload.weather)
    }
}

#[async_trait]
impl WeatherSourcePort for WeatherAdapter {
    #[instrument(skip(self, location), fields(location = %location))]
    async fn fetch_weather(&self, location: &LocationId) -> Result<WeatherReport, ApplicationError> {
        let result = self
            .client
            .get_weather(location.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(payload) => {
                debug!(temp = ?payload.temp, weather = ?payload.weather, "Retrieved weather");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather");
            },
        }

        result.map(Self::map_payload)
    }
}
