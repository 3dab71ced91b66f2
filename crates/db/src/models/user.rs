//! User record model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;
use wayfarer_core::trip::TripCosts;
use wayfarer_core::types::{Amount, RecordId, Timestamp};

use super::ExtraFields;

/// A stored user with the trip they are planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub flight_data: FlightDetails,
    pub hotel_data: HotelDetails,
    pub itinerary_data: ItineraryDetails,
    #[serde(default)]
    pub user_data: UserSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct FlightDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub flight_cost: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct HotelDetails {
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub hotel_cost: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct ItineraryDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub itinerary_cost: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub total_cost: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl User {
    pub fn costs(&self) -> TripCosts {
        TripCosts {
            flight: self.flight_data.flight_cost,
            hotel: self.hotel_data.hotel_cost,
            itinerary: self.itinerary_data.itinerary_cost,
        }
    }

    /// Reset `user_data.total_cost` from the three component costs.
    pub fn recompute_total(&mut self) {
        self.user_data.total_cost = self.costs().total();
    }

    /// Origin city of the user's flight, if one was given.
    pub fn origin(&self) -> Option<&str> {
        self.flight_data.origin.as_deref()
    }

    /// Overwrite the trip sub-records with copies of `source`'s.
    pub fn copy_trip_from(&mut self, source: &User) {
        self.flight_data = source.flight_data.clone();
        self.hotel_data = source.hotel_data.clone();
        self.itinerary_data = source.itinerary_data.clone();
        self.recompute_total();
    }
}

/// DTO for creating a user. The three trip groups are required; their
/// cost fields default to zero.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(nested)]
    pub flight_data: FlightDetails,
    #[validate(nested)]
    pub hotel_data: HotelDetails,
    #[validate(nested)]
    pub itinerary_data: ItineraryDetails,
    #[serde(default)]
    pub user_data: UserSummary,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CreateUser {
    /// Materialize a stored user with a fresh id and computed total.
    pub fn into_user(self, id: RecordId, created_at: Timestamp) -> User {
        let mut extra = self.extra;
        extra.remove("id");
        extra.remove("created_at");

        let mut user = User {
            id,
            flight_data: self.flight_data,
            hotel_data: self.hotel_data,
            itinerary_data: self.itinerary_data,
            user_data: self.user_data,
            created_at: Some(created_at),
            extra,
        };
        user.recompute_total();
        user
    }
}
