//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the HTTP weather
//! source, the in-memory page the widget renders into, configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod dom;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig};
pub use dom::{Document, Element, ElementId};
pub use telemetry::{build_filter, init_logging};
