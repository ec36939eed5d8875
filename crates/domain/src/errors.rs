//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The fare service answered, but no numeric fare could be extracted
    #[error("Couldn't parse response: {raw}")]
    MalformedResponse {
        /// The offending value, serialized as JSON text
        raw: String,
    },

    /// Invalid date/time input
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Not a known IANA timezone name
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

impl DomainError {
    /// Create a malformed response error from the offending raw value
    pub fn malformed(raw: impl Into<String>) -> Self {
        Self::MalformedResponse { raw: raw.into() }
    }

    /// The raw payload attached to this error, if any
    #[must_use]
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw } => Some(raw),
            Self::InvalidDateTime(_) | Self::InvalidTimezone(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_creates_correct_error() {
        let err = DomainError::malformed("\"not-a-number\"");
        match err {
            DomainError::MalformedResponse { ref raw } => {
                assert_eq!(raw, "\"not-a-number\"");
            },
            other => unreachable!("Expected MalformedResponse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_error_message_is_correct() {
        let err = DomainError::malformed("[1,2,3]");
        assert_eq!(err.to_string(), "Couldn't parse response: [1,2,3]");
    }

    #[test]
    fn raw_payload_is_exposed_for_malformed() {
        let err = DomainError::malformed("null");
        assert_eq!(err.raw_payload(), Some("null"));
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
        assert_eq!(err.raw_payload(), None);
    }

    #[test]
    fn invalid_timezone_error_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus_Mons".to_string());
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus_Mons");
        assert_eq!(err.raw_payload(), None);
    }
}
