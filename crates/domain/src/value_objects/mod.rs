//! Value Objects - Immutable, identity-less domain primitives

mod class_token;
mod location_id;
mod temperature_reading;

pub use class_token::ClassToken;
pub use location_id::LocationId;
pub use temperature_reading::TemperatureReading;
