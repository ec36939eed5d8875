//! Fare prediction HTTP client

use std::time::Duration;

use async_trait::async_trait;
use domain::RideRequest;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::FareApiConfig;
use crate::error::FareApiError;

/// Client trait for the fare prediction service
#[async_trait]
pub trait FareApiClient: Send + Sync {
    /// Send one prediction request and return the decoded JSON body
    ///
    /// Exactly one attempt is made. Only HTTP 200 counts as success.
    async fn fetch_prediction(&self, request: &RideRequest) -> Result<Value, FareApiError>;
}

/// reqwest-based implementation of [`FareApiClient`]
#[derive(Debug)]
pub struct HttpFareApiClient {
    client: Client,
    config: FareApiConfig,
}

impl HttpFareApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: FareApiConfig) -> Result<Self, FareApiError> {
        config.validate().map_err(FareApiError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FareApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, FareApiError> {
        Self::new(FareApiConfig::default())
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &FareApiConfig {
        &self.config
    }

    /// Map a reqwest error, keeping timeouts distinct
    fn map_request_error(&self, err: &reqwest::Error) -> FareApiError {
        if err.is_timeout() {
            self.timeout_error(err.is_connect())
        } else if err.is_connect() {
            FareApiError::ConnectionFailed(err.to_string())
        } else {
            FareApiError::RequestFailed(err.to_string())
        }
    }

    /// Timeout error carrying the limit that actually fired
    const fn timeout_error(&self, during_connect: bool) -> FareApiError {
        if during_connect {
            FareApiError::ConnectTimeout {
                connect_timeout_secs: self.config.connect_timeout_secs,
            }
        } else {
            FareApiError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        }
    }

    /// Decode a 200 body as JSON
    fn decode_body(body: String) -> Result<Value, FareApiError> {
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(FareApiError::InvalidJson {
                reason: e.to_string(),
                body,
            }),
        }
    }
}

#[async_trait]
impl FareApiClient for HttpFareApiClient {
    #[instrument(skip(self, request), fields(endpoint = %self.config.endpoint, pickup_datetime = %request.pickup_datetime))]
    async fn fetch_prediction(&self, request: &RideRequest) -> Result<Value, FareApiError> {
        let params = request.query_params();
        debug!(?params, "Sending to API");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        if status != StatusCode::OK {
            info!(status = status.as_u16(), "Fare service returned an error status");
            return Err(FareApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let value = Self::decode_body(body)?;
        debug!(response = %value, "API Response");
        Ok(value)
    }
}
