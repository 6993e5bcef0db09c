//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod document_view_adapter;
mod weather_adapter;

pub use document_view_adapter::{DocumentView, SharedDocument, shared_document};
pub use weather_adapter::WeatherAdapter;
