//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod passenger_count;
mod pickup_datetime;
mod timezone;

pub use coordinates::{Coordinates, NYC_LATITUDE_RANGE, NYC_LONGITUDE_RANGE};
pub use passenger_count::PassengerCount;
pub use pickup_datetime::{
    MAX_PICKUP_YEAR, MIN_PICKUP_YEAR, PICKUP_DATETIME_FORMAT, PickupDatetime, parse_date, parse_time,
};
pub use timezone::Timezone;
