//! Logging utilities.
//!
//! The library itself only emits through the `log` facade. This module offers
//! an `env_logger` setup for tools and tests that do not bring their own.

mod init;

pub use init::{init_logging, LoggingConfig};
