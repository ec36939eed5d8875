//! Passenger count value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of passengers for a ride
///
/// The fare form limits input to [`PassengerCount::MIN`]..=[`PassengerCount::MAX`],
/// but the value is forwarded as given. Out-of-range counts are never rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerCount(i64);

impl PassengerCount {
    /// Smallest count offered by the fare form
    pub const MIN: i64 = 1;

    /// Largest count offered by the fare form
    pub const MAX: i64 = 8;

    /// Create a passenger count
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self(count)
    }

    /// Get the raw count
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether the count lies in the range the fare form offers
    #[must_use]
    pub const fn is_typical(&self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

impl Default for PassengerCount {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PassengerCount {
    fn from(count: i64) -> Self {
        Self(count)
    }
}
