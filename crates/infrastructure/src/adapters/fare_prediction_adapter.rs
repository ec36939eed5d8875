//! Fare prediction adapter - Implements FarePredictionPort using integration_fare

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::FarePredictionPort;
use application::services::FareService;
use async_trait::async_trait;
use domain::{DomainError, RideRequest};
use integration_fare::{FareApiClient, FareApiConfig, FareApiError, HttpFareApiClient};
use serde_json::Value;
use tracing::{debug, instrument};

/// Adapter for the remote fare model
#[derive(Debug)]
pub struct FarePredictionAdapter {
    client: HttpFareApiClient,
}

impl FarePredictionAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(FareApiConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: FareApiConfig) -> Result<Self, ApplicationError> {
        let client = HttpFareApiClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration fare error to application error
    fn map_error(err: FareApiError) -> ApplicationError {
        match err {
            FareApiError::ConnectionFailed(e) | FareApiError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            FareApiError::Timeout { timeout_secs } => ApplicationError::Timeout { timeout_secs },
            FareApiError::ConnectTimeout {
                connect_timeout_secs,
            } => ApplicationError::ConnectTimeout {
                connect_timeout_secs,
            },
            FareApiError::UnexpectedStatus { status, body } => {
                ApplicationError::UpstreamStatus { status, body }
            },
            FareApiError::InvalidJson { body, .. } => DomainError::malformed(body).into(),
            FareApiError::ConfigurationError(e) => ApplicationError::Configuration(e),
        }
    }
}

#[async_trait]
impl FarePredictionPort for FarePredictionAdapter {
    #[instrument(skip(self, request))]
    async fn request_prediction(&self, request: &RideRequest) -> Result<Value, ApplicationError> {
        let result = self
            .client
            .fetch_prediction(request)
            .await
            .map_err(Self::map_error);

        if let Err(e) = &result {
            debug!(error = %e, "Fare prediction request failed");
        }

        result
    }
}

/// Build a ready-to-use fare service from configuration
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_fare_service(config: &FareApiConfig) -> Result<FareService, ApplicationError> {
    let adapter = FarePredictionAdapter::with_config(config.clone())?;
    Ok(FareService::new(Arc::new(adapter)))
}
