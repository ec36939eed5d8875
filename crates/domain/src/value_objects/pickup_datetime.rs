//! Pickup timestamp value object

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::errors::DomainError;

/// Wire format expected by the fare service
pub const PICKUP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Earliest year the four-digit wire format can express
pub const MIN_PICKUP_YEAR: i32 = 1;

/// Latest year the four-digit wire format can express
pub const MAX_PICKUP_YEAR: i32 = 9999;

/// A naive (timezone-less) pickup timestamp with whole-second precision
///
/// The fare service interprets it as New York local time. No offset is
/// attached on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickupDatetime(NaiveDateTime);

impl PickupDatetime {
    /// Combine a calendar date and a wall-clock time
    ///
    /// Sub-second precision is truncated, never rounded.
    #[must_use]
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from_naive(date.and_time(time))
    }

    /// Wrap an existing naive timestamp, truncating sub-second precision
    #[must_use]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        // with_nanosecond(0) is always in range
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Parse from separate date (`YYYY-MM-DD`) and time (`HH:MM` or `HH:MM:SS`) strings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if either part cannot be parsed.
    pub fn parse(date: &str, time: &str) -> Result<Self, DomainError> {
        let date = parse_date(date)?;
        let time = parse_time(time.trim())?;
        Ok(Self::new(date, time))
    }

    /// The calendar date
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// The wall-clock time
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// The underlying naive timestamp
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parse a `YYYY-MM-DD` date, limited to years 1 through 9999
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` if the date cannot be parsed or its
/// year has no four-digit rendering.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::InvalidDateTime(format!("{s}: {e}")))?;

    if !(MIN_PICKUP_YEAR..=MAX_PICKUP_YEAR).contains(&date.year()) {
        return Err(DomainError::InvalidDateTime(format!(
            "{s}: year must be between {MIN_PICKUP_YEAR} and {MAX_PICKUP_YEAR}"
        )));
    }

    Ok(date)
}

/// Parse a wall-clock time, accepting fractional seconds
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` if no supported format matches.
pub fn parse_time(s: &str) -> Result<NaiveTime, DomainError> {
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| DomainError::InvalidDateTime(format!("{s}: expected HH:MM or HH:MM:SS")))
}

impl fmt::Display for PickupDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PICKUP_DATETIME_FORMAT))
    }
}

impl From<NaiveDateTime> for PickupDatetime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}

impl Serialize for PickupDatetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PickupDatetime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, PICKUP_DATETIME_FORMAT)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
