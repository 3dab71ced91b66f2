//! Itinerary record model and envelope.

use serde::{Deserialize, Serialize};
use validator::Validate;
use wayfarer_core::recommendation::Rated;
use wayfarer_core::types::Amount;

use super::ExtraFields;

/// A stored itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Itinerary {
    #[validate(nested)]
    pub itinerary_data: ItineraryInfo,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ItineraryInfo {
    #[validate(length(min = 1))]
    pub city_name: String,
    pub rating: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Rated for Itinerary {
    fn city_name(&self) -> &str {
        &self.itinerary_data.city_name
    }

    fn rating(&self) -> Amount {
        self.itinerary_data.rating
    }
}

/// `{"itineraries": [...]}` as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItineraryEnvelope {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Itineraries are appended exactly as received once they validate.
pub type CreateItinerary = Itinerary;
