//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod weather_source_port;
mod weather_view_port;

#[cfg(test)]
pub use weather_source_port::MockWeatherSourcePort;
pub use weather_source_port::WeatherSourcePort;
#[cfg(test)]
pub use weather_view_port::MockWeatherViewPort;
pub use weather_view_port::{BACKGROUND_CLASS, TEMPERATURE_CLASS, WeatherViewPort};
