//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error, including malformed fare responses
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The fare service answered with a non-200 status
    #[error("Error from API: {status} - {body}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// Response body text, verbatim
        body: String,
    },

    /// The fare service did not answer in time
    #[error("Fare service timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// No connection to the fare service within the connect timeout
    #[error("Could not connect to fare service within {connect_timeout_secs} seconds")]
    ConnectTimeout {
        /// The configured connect timeout in seconds
        connect_timeout_secs: u64,
    },

    /// Network-level failure talking to the fare service
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Whether this error happened at the HTTP boundary
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus { .. }
                | Self::Timeout { .. }
                | Self::ConnectTimeout { .. }
                | Self::ExternalService(_)
        )
    }

    /// Whether the response arrived but held no usable fare
    #[must_use]
    pub const fn is_malformed_response(&self) -> bool {
        matches!(self, Self::Domain(DomainError::MalformedResponse { .. }))
    }

    /// The original payload that accompanies this error, if any
    #[must_use]
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            Self::Domain(e) => e.raw_payload(),
            Self::UpstreamStatus { body, .. } => Some(body),
            Self::Timeout { .. }
            | Self::ConnectTimeout { .. }
            | Self::ExternalService(_)
            | Self::Configuration(_) => None,
        }
    }
}
