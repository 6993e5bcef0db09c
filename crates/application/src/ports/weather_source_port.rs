//! Weather source port
//!
//! Defines the interface for retrieving the weather report of a location.

use async_trait::async_trait;
use domain::{LocationId, WeatherReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching weather reports
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherSourcePort: Send + Sync {
    /// Fetch the current report for a location
    ///
    /// Transport failures, non-success statuses and unparsable bodies are
    /// all returned as errors.
    async fn fetch_weather(&self, location: &LocationId) -> Result<WeatherReport, ApplicationError>;
}
