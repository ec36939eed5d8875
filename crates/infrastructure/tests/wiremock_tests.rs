//! End-to-end tests for the fare adapter and service using wiremock

use std::sync::Arc;

use application::services::{FareService, OutcomeKind, PredictionOutcome};
use application::ApplicationError;
use chrono::{NaiveDate, NaiveTime};
use domain::{FareSource, RideRequest};
use infrastructure::{FarePredictionAdapter, build_fare_service};
use integration_fare::FareApiConfig;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

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

fn service_for(mock_server: &MockServer) -> FareService {
    let config = FareApiConfig::for_testing(format!("{}/predict", mock_server.uri()));
    build_fare_service(&config).unwrap()
}

async fn mount(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(response)
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn clean_prediction_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .and(query_param("pickup_datetime", "2024-05-17 18:42:07"))
        .and(query_param("passenger_count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fare_amount": 12.5})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    assert_eq!(outcome.kind(), OutcomeKind::Success);
    assert_eq!(outcome.fare_amount(), Some(12.5));
    let prediction = outcome.prediction().unwrap();
    assert_eq!(
        prediction.source,
        FareSource::Field {
            key: "fare_amount".to_string()
        }
    );
    assert_eq!(prediction.formatted_fare(), "$12.50");
}

#[tokio::test]
async fn bare_string_body_is_coerced() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string("\"12.00\"")).await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.fare_amount(), Some(12.0));
}

#[tokio::test]
async fn unknown_key_is_degraded() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"estimate": 7.25, "currency": "USD"}"#),
    )
    .await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    match outcome {
        PredictionOutcome::Degraded {
            prediction,
            warning,
        } => {
            assert!((prediction.fare_amount - 7.25).abs() < f64::EPSILON);
            assert!(warning.contains("estimate"));
            assert_eq!(
                prediction.raw_response,
                json!({"estimate": 7.25, "currency": "USD"})
            );
        },
        other => panic!("Expected Degraded, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    match outcome {
        PredictionOutcome::Failed(ApplicationError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        },
        other => panic!("Expected UpstreamStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string("twelve dollars")).await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    match outcome {
        PredictionOutcome::Failed(err) => {
            assert!(err.is_malformed_response());
            assert_eq!(err.raw_payload(), Some("twelve dollars"));
        },
        other => panic!("Expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn array_body_is_malformed_response() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_json(json!([12.5]))).await;

    let outcome = service_for(&mock_server).predict(&sample_request()).await;

    match outcome {
        PredictionOutcome::Failed(err) => {
            assert!(err.is_malformed_response());
            assert_eq!(err.raw_payload(), Some("[12.5]"));
        },
        other => panic!("Expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("12.0")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = FareApiConfig {
        timeout_secs: 1,
        ..FareApiConfig::for_testing(format!("{}/predict", mock_server.uri()))
    };
    let adapter = FarePredictionAdapter::with_config(config).unwrap();
    let service = FareService::new(Arc::new(adapter));

    let outcome = service.predict(&sample_request()).await;

    match outcome {
        PredictionOutcome::Failed(err) => {
            assert!(matches!(err, ApplicationError::Timeout { timeout_secs: 1 }));
            assert!(err.is_transport());
        },
        other => panic!("Expected Timeout, got: {other:?}"),
    }
}
