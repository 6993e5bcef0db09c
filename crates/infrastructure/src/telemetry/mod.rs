//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays free
//! for command output.

mod logging;

pub use logging::{build_filter, init_logging};
