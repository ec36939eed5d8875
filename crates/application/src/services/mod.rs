//! Application services - Use case implementations

mod fare_service;

pub use fare_service::{FareService, OutcomeKind, PredictionOutcome};
