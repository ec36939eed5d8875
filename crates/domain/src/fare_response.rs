//! Fare response normalization
//!
//! The fare service does not commit to a response shape. Observed bodies
//! include `{"fare_amount": 12.3}`, `{"prediction": 12.3}`, `{"fare": 12.3}`,
//! a bare number, and a numeric string. [`normalize_fare_response`] accepts
//! all of them and reports which one it saw.
//!
//! Key probing and the positional fallback exist only because the upstream
//! contract is unstable. Once the service pins its schema both can go.

use serde_json::{Map, Value};

use crate::entities::{FareExtraction, FareSource};
use crate::errors::DomainError;

/// Recognized fare fields, highest priority first
pub const FARE_KEYS: [&str; 3] = ["fare_amount", "prediction", "fare"];

/// Extract a single fare from a decoded response body
///
/// Order, first match wins:
/// 1. object with a recognized key ([`FARE_KEYS`]) → that value
/// 2. any other non-empty object → its first value, flagged as a fallback
/// 3. number → itself
/// 4. string → parsed as a float
/// 5. anything else → `MalformedResponse`
///
/// Pure and idempotent.
///
/// # Errors
///
/// Returns `DomainError::MalformedResponse` carrying the offending value
/// when no finite numeric fare can be extracted.
pub fn normalize_fare_response(value: &Value) -> Result<FareExtraction, DomainError> {
    match value {
        Value::Object(map) => extract_from_object(map, value),
        Value::Number(_) => Ok(FareExtraction {
            fare_amount: coerce_fare(value)?,
            source: FareSource::BareNumber,
        }),
        Value::String(_) => Ok(FareExtraction {
            fare_amount: coerce_fare(value)?,
            source: FareSource::BareString,
        }),
        Value::Array(_) | Value::Bool(_) | Value::Null => Err(malformed(value)),
    }
}

fn extract_from_object(map: &Map<String, Value>, whole: &Value) -> Result<FareExtraction, DomainError> {
    if let Some((key, fare)) = FARE_KEYS
        .iter()
        .find_map(|key| map.get(*key).map(|fare| (*key, fare)))
    {
        return Ok(FareExtraction {
            fare_amount: coerce_fare(fare)?,
            source: FareSource::Field {
                key: key.to_string(),
            },
        });
    }

    // Relies on serde_json's preserve_order to keep response order
    let (key, fare) = map.iter().next().ok_or_else(|| malformed(whole))?;

    Ok(FareExtraction {
        fare_amount: coerce_fare(fare)?,
        source: FareSource::FallbackField {
            key: key.clone(),
            available_keys: map.keys().cloned().collect(),
        },
    })
}

/// Coerce a single JSON value to a finite float
fn coerce_fare(value: &Value) -> Result<f64, DomainError> {
    let fare = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    fare.filter(|f| f.is_finite()).ok_or_else(|| malformed(value))
}

fn malformed(value: &Value) -> DomainError {
    DomainError::malformed(value.to_string())
}
