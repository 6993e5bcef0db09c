//! Same-origin weather client
//!
//! HTTP client for the page's own `get_weather` endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::WeatherPayload;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the endpoint failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the endpoint failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status: HTTP {0}")]
    UnexpectedStatus(u16),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configured origin is not a usable http(s) URL
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),
}

/// Endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Page URL or origin the endpoint is served from
    /// (default: <http://localhost:8000>). Only the origin part is used.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Session cookie (`name=value`) sent with every request to the origin
    #[serde(default)]
    pub session_cookie: Option<String>,
}

fn default_origin() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            timeout_secs: default_timeout(),
            session_cookie: None,
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the weather for a location id
    async fn get_weather(&self, location_id: &str) -> Result<WeatherPayload, WeatherError>;
}

/// HTTP client bound to a single origin
///
/// Cookies live in a jar scoped to that origin, so they are sent with
/// same-origin requests only.
#[derive(Debug)]
pub struct SameOriginClient {
    client: Client,
    origin: String,
}

impl SameOriginClient {
    /// Create a client for the configured origin
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is not an http(s) URL or the HTTP
    /// client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let origin = Self::parse_origin(&config.origin)?;
        let origin_url =
            Url::parse(&origin).map_err(|e| WeatherError::InvalidOrigin(e.to_string()))?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.session_cookie {
            jar.add_cookie_str(cookie, &origin_url);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(jar)
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, origin })
    }

    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// The serialized origin requests are sent to, e.g. `http://host:8000`
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Build the endpoint URL for a location id
    ///
    /// The id is inserted verbatim, without escaping.
    pub fn endpoint_url(&self, location_id: &str) -> String {
        format!("{}/{}/get_weather", self.origin, location_id)
    }

    /// Reduce a page URL to its origin
    fn parse_origin(raw: &str) -> Result<String, WeatherError> {
        let url = Url::parse(raw).map_err(|e| WeatherError::InvalidOrigin(format!("{raw}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WeatherError::InvalidOrigin(format!(
                "{raw}: unsupported scheme {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(WeatherError::InvalidOrigin(format!("{raw}: missing host")));
        }

        Ok(url.origin().ascii_serialization())
    }

    fn map_send_error(err: &reqwest::Error) -> WeatherError {
        if err.is_connect() || err.is_timeout() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherClient for SameOriginClient {
    #[instrument(skip(self), fields(origin = %self.origin))]
    async fn get_weather(&self, location_id: &str) -> Result<WeatherPayload, WeatherError> {
        let url = self.endpoint_url(location_id);
        debug!(url = %url, "Fetching weather");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}
