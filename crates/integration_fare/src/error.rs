//! Fare API error types

use thiserror::Error;

/// Errors that can occur while talking to the fare service
#[derive(Debug, Error)]
pub enum FareApiError {
    /// The HTTP client could not be built or the connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request failed for a reason other than a timeout
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No complete response within the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// No connection established within the configured connect timeout
    #[error("Connection timed out after {connect_timeout_secs} seconds")]
    ConnectTimeout {
        /// The connect timeout in seconds
        connect_timeout_secs: u64,
    },

    /// The service answered with something other than HTTP 200
    #[error("Error from API: {status} - {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body text, verbatim
        body: String,
    },

    /// HTTP 200, but the body is not JSON
    #[error("Response is not valid JSON ({reason}): {body}")]
    InvalidJson {
        /// Response body text, verbatim
        body: String,
        /// Decoder message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl FareApiError {
    /// Returns true for failures at the HTTP transport level
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::ConnectTimeout { .. }
                | Self::UnexpectedStatus { .. }
        )
    }
}
