//! Terminal rendering of requests and prediction outcomes

use application::services::PredictionOutcome;
use domain::{FarePrediction, FareSource, PassengerCount, RideRequest};
use serde::Serialize;
use serde_json::Value;

/// Route summary shown before the request is sent
pub fn route_summary(request: &RideRequest) -> String {
    format!(
        "🚕 Ride at {}\n   Pickup:  {}\n   Dropoff: {}\n   Passengers: {}",
        request.pickup_datetime, request.pickup, request.dropoff, request.passenger_count
    )
}

/// Advisory tips about inputs the fare model was not trained on
///
/// Never blocks the request.
pub fn advisories(request: &RideRequest) -> Vec<String> {
    let mut tips = Vec::new();

    if !request.pickup.is_within_nyc() {
        tips.push(format!(
            "Pickup ({}) is outside the New York City area",
            request.pickup
        ));
    }
    if !request.dropoff.is_within_nyc() {
        tips.push(format!(
            "Dropoff ({}) is outside the New York City area",
            request.dropoff
        ));
    }
    if !request.passenger_count.is_typical() {
        tips.push(format!(
            "Passenger count {} is outside the usual range {}-{}",
            request.passenger_count,
            PassengerCount::MIN,
            PassengerCount::MAX
        ));
    }

    tips
}

/// The outbound query parameters, one per line
pub fn sent_params(request: &RideRequest) -> String {
    let mut out = String::from("Sending to API:");
    for (name, value) in request.query_params() {
        out.push_str(&format!("\n   {name} = {value}"));
    }
    out
}

/// Human-readable rendering of an outcome
pub fn outcome_text(outcome: &PredictionOutcome) -> String {
    match outcome {
        PredictionOutcome::Success(prediction) => fare_line(prediction),
        PredictionOutcome::Degraded {
            prediction,
            warning,
        } => format!(
            "⚠️  {warning}\nAPI Response:\n{}\n{}",
            pretty(&prediction.raw_response),
            fare_line(prediction)
        ),
        PredictionOutcome::Failed(err) => format!("❌ {err}"),
    }
}

fn fare_line(prediction: &FarePrediction) -> String {
    format!(
        "💵 The predicted fare amount is: {}",
        prediction.formatted_fare()
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Machine-readable report for `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    outcome: String,
    request: &'a RideRequest,
    sent: serde_json::Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fare_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a FareSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    advisories: Vec<String>,
}

impl<'a> JsonReport<'a> {
    /// Assemble a report from a request and its outcome
    pub fn new(request: &'a RideRequest, outcome: &'a PredictionOutcome) -> Self {
        let sent = request
            .query_params()
            .into_iter()
            .map(|(name, value)| (name.to_string(), Value::String(value)))
            .collect();

        let prediction = outcome.prediction();
        let (warning, error) = match outcome {
            PredictionOutcome::Degraded { warning, .. } => (Some(warning.as_str()), None),
            PredictionOutcome::Failed(err) => (None, Some(err.to_string())),
            PredictionOutcome::Success(_) => (None, None),
        };

        Self {
            outcome: outcome.kind().to_string(),
            request,
            sent,
            fare_amount: outcome.fare_amount(),
            source: prediction.map(|p| &p.source),
            warning,
            raw_response: prediction.map(|p| &p.raw_response),
            error,
            advisories: advisories(request),
        }
    }

    /// Serialize as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
