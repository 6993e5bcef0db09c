//! Application services - Use case implementations

mod weather_widget_service;

pub use weather_widget_service::{FetchOutcome, WeatherWidgetService, update_weather};
