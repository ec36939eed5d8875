//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory longitude range for New York City rides
pub const NYC_LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -74.03..=-73.75;

/// Advisory latitude range for New York City rides
pub const NYC_LATITUDE_RANGE: std::ops::RangeInclusive<f64> = 40.63..=40.85;

/// A point given as longitude/latitude in degrees
///
/// Values are not range-checked. Whatever the caller supplies is forwarded
/// to the fare service unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    longitude: f64,
    latitude: f64,
}

impl Coordinates {
    /// Create coordinates from longitude and latitude (in that order)
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Whether the point lies inside the usual NYC bounding box
    ///
    /// Diagnostic only, never used to reject a request.
    #[must_use]
    pub fn is_within_nyc(&self) -> bool {
        NYC_LONGITUDE_RANGE.contains(&self.longitude) && NYC_LATITUDE_RANGE.contains(&self.latitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Default locations of the fare form
impl Coordinates {
    /// Upper East Side, default pickup
    #[must_use]
    pub const fn default_pickup() -> Self {
        Self::new(-73.950_655, 40.783_282)
    }

    /// Midtown West, default dropoff
    #[must_use]
    pub const fn default_dropoff() -> Self {
        Self::new(-73.984_365, 40.769_802)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let c = Coordinates::new(-73.95, 40.78);
        assert!((c.longitude() + 73.95).abs() < f64::EPSILON);
        assert!((c.latitude() - 40.78).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let c = Coordinates::new(500.0, -1000.0);
        assert!((c.longitude() - 500.0).abs() < f64::EPSILON);
        assert!((c.latitude() + 1000.0).abs() < f64::EPSILON);
        assert!(!c.is_within_nyc());
    }

    #[test]
    fn test_defaults_are_in_nyc() {
        assert!(Coordinates::default_pickup().is_within_nyc());
        assert!(Coordinates::default_dropoff().is_within_nyc());
    }

    #[test]
    fn test_outside_nyc() {
        // Berlin
        assert!(!Coordinates::new(13.405, 52.52).is_within_nyc());
        // Newark airport, just west of the box
        assert!(!Coordinates::new(-74.1745, 40.6895).is_within_nyc());
    }

    #[test]
    fn test_display_uses_six_decimals() {
        let c = Coordinates::new(-73.950_655, 40.783_282);
        assert_eq!(c.to_string(), "40.783282, -73.950655");

        let c = Coordinates::new(-74.0, 40.5);
        assert_eq!(c.to_string(), "40.500000, -74.000000");
    }

    #[test]
    fn test_serialization() {
        let c = Coordinates::new(-73.984_365, 40.769_802);
        let json = serde_json::to_string(&c).expect("serialize");
        assert!(json.contains("-73.984365"));
        assert!(json.contains("40.769802"));

        let deserialized: Coordinates = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(c, deserialized);
    }
}
