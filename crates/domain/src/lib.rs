//! Domain layer for the weather widget
//!
//! Contains the value objects and entities shared by every other layer.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
