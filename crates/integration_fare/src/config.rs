//! Fare API configuration

use serde::{Deserialize, Serialize};

/// Prediction endpoint of the hosted fare model
pub const DEFAULT_ENDPOINT: &str = "https://taxi-399730216663.europe-west1.run.app/predict";

/// Configuration for the fare prediction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareApiConfig {
    /// Full URL of the prediction endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Total request timeout in seconds, body included
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP/TLS connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("taxifare/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FareApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FareApiConfig {
    /// Create a configuration pointing at a custom endpoint, with short timeouts
    #[must_use]
    pub fn for_testing(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }

        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| format!("endpoint is not a valid URL: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
