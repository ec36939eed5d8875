//! Fare prediction service integration
//!
//! Sends a [`domain::RideRequest`] to the remote fare model as a GET query and
//! hands back the decoded JSON body untouched. Interpreting that body is the
//! domain's job (see [`domain::normalize_fare_response`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_fare::{FareApiClient, FareApiConfig, HttpFareApiClient};
//!
//! let client = HttpFareApiClient::new(FareApiConfig::default())?;
//! let body = client.fetch_prediction(&request).await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{FareApiClient, HttpFareApiClient};
pub use config::{DEFAULT_ENDPOINT, FareApiConfig};
pub use error::FareApiError;
