//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather widget talks through and the service that
//! fetches a report and renders it into the page.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
