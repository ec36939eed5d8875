//! Application configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `taxifare.toml` in the working directory, or an explicit file
//! 3. `TAXIFARE_*` environment variables, `__` between nesting levels
//!    (e.g. `TAXIFARE_FARE_API__TIMEOUT_SECS=5`)

mod logging;

use std::path::Path;

use domain::Timezone;
use integration_fare::FareApiConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TAXIFARE";

/// Default configuration file name, without extension
pub const DEFAULT_CONFIG_FILE: &str = "taxifare";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Timezone used when the pickup time defaults to "now"
    #[serde(default)]
    pub pickup_timezone: Timezone,

    /// Fare prediction service
    #[serde(default)]
    pub fare_api: FareApiConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default file (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the result is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the result is invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, env_source())
    }

    fn build(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
            |p| config::File::from(p).required(true),
        );

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(endpoint = %config.fare_api.endpoint, "Configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first invalid setting.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.fare_api
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("fare_api: {e}")))
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
