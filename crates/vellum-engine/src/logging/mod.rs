//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else logs through the
//! standard `log` facade; trace channels are plain log targets
//! (`vellum::graphics`, `vellum::interp`, ...), so `RUST_LOG` or
//! [`LoggingConfig::env_filter`] can switch individual channels on.

mod init;

pub use init::{init_logging, LoggingConfig};
