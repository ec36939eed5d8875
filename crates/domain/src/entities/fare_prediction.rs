//! Fare prediction entity

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::DomainError;
use crate::fare_response::normalize_fare_response;

/// Where in the raw response the fare was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FareSource {
    /// A recognized field of a JSON object
    Field {
        /// The field name
        key: String,
    },
    /// The first field of an object that had none of the recognized names
    FallbackField {
        /// The field that was used
        key: String,
        /// All field names of the object, in response order
        available_keys: Vec<String>,
    },
    /// The response body was a bare JSON number
    BareNumber,
    /// The response body was a numeric JSON string
    BareString,
}

impl FareSource {
    /// Whether this extraction relied on the positional fallback
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::FallbackField { .. })
    }
}

impl fmt::Display for FareSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { key } => write!(f, "field '{key}'"),
            Self::FallbackField { key, .. } => write!(f, "first field '{key}' (fallback)"),
            Self::BareNumber => write!(f, "bare number"),
            Self::BareString => write!(f, "numeric string"),
        }
    }
}

/// A fare pulled out of a response, with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareExtraction {
    /// The fare, any finite value
    pub fare_amount: f64,
    /// Where it came from
    pub source: FareSource,
}

impl FareExtraction {
    /// Whether this extraction relied on the positional fallback
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.source.is_degraded()
    }
}

/// The result of one prediction round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarePrediction {
    /// Predicted fare, not sign-checked
    pub fare_amount: f64,
    /// Where in the response the fare was found
    pub source: FareSource,
    /// The decoded response body, kept for diagnostics
    pub raw_response: Value,
}

impl FarePrediction {
    /// Normalize a decoded response body into a prediction
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedResponse` if no numeric fare can be extracted.
    pub fn from_response(raw_response: Value) -> Result<Self, DomainError> {
        let FareExtraction {
            fare_amount,
            source,
        } = normalize_fare_response(&raw_response)?;

        Ok(Self {
            fare_amount,
            source,
            raw_response,
        })
    }

    /// Whether this prediction relied on the positional fallback
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.source.is_degraded()
    }

    /// Fare formatted as dollars with two decimals
    #[must_use]
    pub fn formatted_fare(&self) -> String {
        format!("${:.2}", self.fare_amount)
    }
}
