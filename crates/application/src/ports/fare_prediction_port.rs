//! Fare prediction port
//!
//! Defines the interface for the remote fare model.

use async_trait::async_trait;
use domain::RideRequest;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Port for the remote fare prediction service
///
/// Implementations make exactly one attempt per call and return the decoded
/// response body without interpreting it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FarePredictionPort: Send + Sync {
    /// Submit a ride and return the raw decoded response body
    async fn request_prediction(&self, request: &RideRequest) -> Result<Value, ApplicationError>;
}
