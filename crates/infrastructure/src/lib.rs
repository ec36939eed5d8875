//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer, loads configuration
//! and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX, LoggingConfig};
pub use telemetry::{LoggingError, init_logging};
