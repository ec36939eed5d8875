//! Ride request entity
//!
//! One immutable request per form submission. Built from raw form fields and
//! turned into the query parameters the fare service expects.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinates, PassengerCount, PickupDatetime};

/// Query parameter names, in the order they are sent
pub mod params {
    /// Naive pickup timestamp, `YYYY-MM-DD HH:MM:SS`
    pub const PICKUP_DATETIME: &str = "pickup_datetime";
    /// Pickup longitude in degrees
    pub const PICKUP_LONGITUDE: &str = "pickup_longitude";
    /// Pickup latitude in degrees
    pub const PICKUP_LATITUDE: &str = "pickup_latitude";
    /// Dropoff longitude in degrees
    pub const DROPOFF_LONGITUDE: &str = "dropoff_longitude";
    /// Dropoff latitude in degrees
    pub const DROPOFF_LATITUDE: &str = "dropoff_latitude";
    /// Passenger count, integer
    pub const PASSENGER_COUNT: &str = "passenger_count";
}

/// Parameters of a single fare prediction request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    /// When the ride starts (naive local time)
    pub pickup_datetime: PickupDatetime,
    /// Where the ride starts
    pub pickup: Coordinates,
    /// Where the ride ends
    pub dropoff: Coordinates,
    /// Number of passengers, forwarded verbatim
    pub passenger_count: PassengerCount,
}

impl RideRequest {
    /// Assemble a request straight from the form's primitive fields
    ///
    /// Total over its input domain: any date, time, float and integer is accepted.
    #[must_use]
    pub fn from_form(
        date: NaiveDate,
        time: NaiveTime,
        pickup_longitude: f64,
        pickup_latitude: f64,
        dropoff_longitude: f64,
        dropoff_latitude: f64,
        passenger_count: i64,
    ) -> Self {
        RideRequestBuilder::new(date, time)
            .pickup(pickup_longitude, pickup_latitude)
            .dropoff(dropoff_longitude, dropoff_latitude)
            .passenger_count(passenger_count)
            .build()
    }

    /// Transport-ready query parameters
    ///
    /// Floats use the shortest representation that round-trips, so distinct
    /// coordinates always yield distinct parameter values.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (params::PICKUP_DATETIME, self.pickup_datetime.to_string()),
            (params::PICKUP_LONGITUDE, self.pickup.longitude().to_string()),
            (params::PICKUP_LATITUDE, self.pickup.latitude().to_string()),
            (params::DROPOFF_LONGITUDE, self.dropoff.longitude().to_string()),
            (params::DROPOFF_LATITUDE, self.dropoff.latitude().to_string()),
            (params::PASSENGER_COUNT, self.passenger_count.to_string()),
        ]
    }
}

/// Builder for [`RideRequest`]
///
/// Only the pickup time is required. Locations and passenger count default
/// to the values pre-filled in the fare form.
#[derive(Debug, Clone, Copy)]
pub struct RideRequestBuilder {
    pickup_datetime: PickupDatetime,
    pickup: Coordinates,
    dropoff: Coordinates,
    passenger_count: PassengerCount,
}

impl RideRequestBuilder {
    /// Start a request for the given pickup date and time
    #[must_use]
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self::at(PickupDatetime::new(date, time))
    }

    /// Start a request for an already combined pickup timestamp
    #[must_use]
    pub fn at(pickup_datetime: PickupDatetime) -> Self {
        Self {
            pickup_datetime,
            pickup: Coordinates::default_pickup(),
            dropoff: Coordinates::default_dropoff(),
            passenger_count: PassengerCount::default(),
        }
    }

    /// Set the pickup location
    #[must_use]
    pub const fn pickup(mut self, longitude: f64, latitude: f64) -> Self {
        self.pickup = Coordinates::new(longitude, latitude);
        self
    }

    /// Set the dropoff location
    #[must_use]
    pub const fn dropoff(mut self, longitude: f64, latitude: f64) -> Self {
        self.dropoff = Coordinates::new(longitude, latitude);
        self
    }

    /// Set the passenger count
    #[must_use]
    pub const fn passenger_count(mut self, count: i64) -> Self {
        self.passenger_count = PassengerCount::new(count);
        self
    }

    /// Finish the request
    #[must_use]
    pub const fn build(self) -> RideRequest {
        RideRequest {
            pickup_datetime: self.pickup_datetime,
            pickup: self.pickup,
            dropoff: self.dropoff,
            passenger_count: self.passenger_count,
        }
    }
}
