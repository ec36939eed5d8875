//! Domain layer for the taxi fare client
//!
//! Contains the ride request model, the fare response normalizer, and
//! domain errors. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod fare_response;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use fare_response::{FARE_KEYS, normalize_fare_response};
pub use value_objects::*;
