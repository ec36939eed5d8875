//! Logging initialization
//!
//! Console logging through `tracing-subscriber`, human-readable or JSON.
//! Output goes to stderr so that stdout stays free for command results.

mod subscriber;

pub use subscriber::{LoggingError, init_logging};
