//! Domain entities - Objects created and consumed within one prediction round trip

mod fare_prediction;
mod ride_request;

pub use fare_prediction::{FareExtraction, FarePrediction, FareSource};
pub use ride_request::{RideRequest, RideRequestBuilder, params};
