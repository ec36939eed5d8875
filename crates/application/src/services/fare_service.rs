//! Fare prediction service
//!
//! One submission in, one tagged outcome out. Never panics and never
//! swallows the upstream payload: every non-clean outcome carries it.

use std::fmt;
use std::sync::Arc;

use domain::{FarePrediction, FareSource, RideRequest};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::FarePredictionPort;

/// Result of a single prediction round trip
#[derive(Debug)]
pub enum PredictionOutcome {
    /// A fare was found under a recognized key or as a bare value
    Success(FarePrediction),
    /// A fare was found only via the positional fallback
    Degraded {
        /// The extracted prediction, raw response included
        prediction: FarePrediction,
        /// Human-readable reason for the reduced confidence
        warning: String,
    },
    /// No fare could be obtained
    Failed(ApplicationError),
}

impl PredictionOutcome {
    /// The prediction, if one was extracted
    #[must_use]
    pub const fn prediction(&self) -> Option<&FarePrediction> {
        match self {
            Self::Success(prediction) | Self::Degraded { prediction, .. } => Some(prediction),
            Self::Failed(_) => None,
        }
    }

    /// The extracted fare, if any
    #[must_use]
    pub fn fare_amount(&self) -> Option<f64> {
        self.prediction().map(|p| p.fare_amount)
    }

    /// Whether the fare was extracted cleanly
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the fare relied on the positional fallback
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Whether no fare could be obtained
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Short classification label
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::Degraded { .. } => OutcomeKind::Degraded,
            Self::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// Classification of a [`PredictionOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Clean extraction
    Success,
    /// Fallback extraction
    Degraded,
    /// No fare
    Failed,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Degraded => write!(f, "degraded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Orchestrates request submission and response normalization
#[derive(Clone)]
pub struct FareService {
    port: Arc<dyn FarePredictionPort>,
}

impl fmt::Debug for FareService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FareService")
            .field("port", &"<dyn FarePredictionPort>")
            .finish()
    }
}

impl FareService {
    /// Create a new service backed by the given port
    #[must_use]
    pub fn new(port: Arc<dyn FarePredictionPort>) -> Self {
        Self { port }
    }

    /// Submit a ride and classify the answer
    #[instrument(skip(self, request), fields(pickup_datetime = %request.pickup_datetime, passengers = %request.passenger_count))]
    pub async fn predict(&self, request: &RideRequest) -> PredictionOutcome {
        match self.port.request_prediction(request).await {
            Ok(raw) => Self::classify(raw),
            Err(e) => {
                info!(error = %e, "Fare prediction request failed");
                PredictionOutcome::Failed(e)
            },
        }
    }

    /// Classify a decoded response body
    ///
    /// Pure: the same body always yields the same classification.
    pub fn classify(raw: Value) -> PredictionOutcome {
        debug!(response = %raw, "Normalizing fare response");

        let prediction = match FarePrediction::from_response(raw) {
            Ok(prediction) => prediction,
            Err(e) => {
                info!(error = %e, "Fare response could not be normalized");
                return PredictionOutcome::Failed(e.into());
            },
        };

        if let FareSource::FallbackField {
            key,
            available_keys,
        } = &prediction.source
        {
            let warning = format!(
                "No recognized fare field; used first field '{key}'. Response keys: {available_keys:?}"
            );
            info!(%warning, fare = prediction.fare_amount, "Degraded fare extraction");
            return PredictionOutcome::Degraded {
                prediction,
                warning,
            };
        }

        info!(fare = prediction.fare_amount, source = %prediction.source, "Fare predicted");
        PredictionOutcome::Success(prediction)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use domain::DomainError;
    use serde_json::json;

    use super::*;
    use crate::ports::MockFarePredictionPort;

    fn sample_request() -> RideRequest {
        RideRequest::from_form(
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            NaiveTime::from_hms_opt(18, 42, 7).unwrap(),
            -73.950_655,
            40.783_282,
            -73.984_365,
            40.769_802,
            2,
        )
    }

    fn service_returning(
        result: impl Fn() -> Result<Value, ApplicationError> + Send + 'static,
    ) -> FareService {
        let mut mock = MockFarePredictionPort::new();
        mock.expect_request_prediction()
            .times(1)
            .returning(move |_| result());
        FareService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn clean_extraction_is_success() {
        let service = service_returning(|| Ok(json!({"fare_amount": 12.5})));

        let outcome = service.predict(&sample_request()).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.fare_amount(), Some(12.5));
        assert_eq!(outcome.kind(), OutcomeKind::Success);
    }

    #[tokio::test]
    async fn fallback_extraction_is_degraded_with_raw_payload() {
        let service = service_returning(|| Ok(json!({"other_key": 7.25})));

        let outcome = service.predict(&sample_request()).await;

        match outcome {
            PredictionOutcome::Degraded {
                prediction,
                warning,
            } => {
                assert!((prediction.fare_amount - 7.25).abs() < f64::EPSILON);
                assert_eq!(prediction.raw_response, json!({"other_key": 7.25}));
                assert!(warning.contains("other_key"));
            },
            other => unreachable!("Expected Degraded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_response_is_failure_with_payload() {
        let service = service_returning(|| Ok(json!("not-a-number")));

        let outcome = service.predict(&sample_request()).await;

        match outcome {
            PredictionOutcome::Failed(err) => {
                assert!(err.is_malformed_response());
                assert_eq!(err.raw_payload(), Some("\"not-a-number\""));
            },
            other => unreachable!("Expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_error_is_failure() {
        let service = service_returning(|| {
            Err(ApplicationError::UpstreamStatus {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        });

        let outcome = service.predict(&sample_request()).await;

        assert!(outcome.is_failure());
        assert_eq!(outcome.fare_amount(), None);
        if let PredictionOutcome::Failed(err) = outcome {
            assert!(err.is_transport());
            assert_eq!(err.raw_payload(), Some("Internal Server Error"));
        }
    }

    #[tokio::test]
    async fn request_is_forwarded_to_port() {
        let expected = sample_request();
        let mut mock = MockFarePredictionPort::new();
        mock.expect_request_prediction()
            .withf(move |request| *request == expected)
            .times(1)
            .returning(|_| Ok(json!(14.75)));
        let service = FareService::new(Arc::new(mock));

        let outcome = service.predict(&sample_request()).await;

        assert_eq!(outcome.fare_amount(), Some(14.75));
    }

    #[test]
    fn classify_is_idempotent() {
        for raw in [
            json!({"fare_amount": 12.5}),
            json!({"prediction": 9}),
            json!({"other_key": 7.25}),
            json!(14.75),
            json!("not-a-number"),
            json!([1, 2, 3]),
            json!(null),
        ] {
            let first = FareService::classify(raw.clone());
            let second = FareService::classify(raw);
            assert_eq!(first.kind(), second.kind());
            assert_eq!(first.fare_amount(), second.fare_amount());
        }
    }

    #[test]
    fn classify_examples() {
        assert_eq!(
            FareService::classify(json!({"prediction": 9})).fare_amount(),
            Some(9.0)
        );
        assert!(FareService::classify(json!({"prediction": 9})).is_success());
        assert!(FareService::classify(json!(null)).is_failure());
        assert!(FareService::classify(json!([1, 2, 3])).is_failure());

        let outcome = FareService::classify(json!({}));
        match outcome {
            PredictionOutcome::Failed(ApplicationError::Domain(DomainError::MalformedResponse {
                raw,
            })) => assert_eq!(raw, "{}"),
            other => unreachable!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn outcome_kind_display() {
        assert_eq!(OutcomeKind::Success.to_string(), "success");
        assert_eq!(OutcomeKind::Degraded.to_string(), "degraded");
        assert_eq!(OutcomeKind::Failed.to_string(), "failed");
    }
}
