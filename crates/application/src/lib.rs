//! Application layer - Use cases and orchestration
//!
//! Wires the ride request, the fare prediction port and the response
//! normalizer into a single prediction use case.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
