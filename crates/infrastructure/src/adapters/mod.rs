//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod fare_prediction_adapter;

pub use fare_prediction_adapter::{FarePredictionAdapter, build_fare_service};
