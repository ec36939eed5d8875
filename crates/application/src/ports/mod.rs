//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod fare_prediction_port;

pub use fare_prediction_port::FarePredictionPort;
#[cfg(test)]
pub use fare_prediction_port::MockFarePredictionPort;
