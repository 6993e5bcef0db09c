//! Same-origin weather endpoint integration
//!
//! Client for the `/<location_id>/get_weather` endpoint served by the page's
//! own origin. Requests carry the page's cookies and nothing else.

pub mod client;
mod models;

pub use client::{SameOriginClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::WeatherPayload;
