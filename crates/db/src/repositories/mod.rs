//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&DataStore` as the first argument. Mutations go through
//! [`Collection::modify`](crate::store::Collection::modify) so they run
//! under the collection lock and only ever write the final collection.

pub mod city_info_repo;
pub mod flight_repo;
pub mod itinerary_repo;
pub mod user_repo;

pub use city_info_repo::CityInfoRepo;
pub use flight_repo::FlightRepo;
pub use itinerary_repo::ItineraryRepo;
pub use user_repo::UserRepo;

use validator::Validate;
use wayfarer_core::error::CoreError;

/// Run `validator` rules and convert failures into [`CoreError::Validation`].
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
