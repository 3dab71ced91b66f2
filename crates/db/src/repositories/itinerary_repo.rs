//! Repository for the `itineraries` collection.

use wayfarer_core::error::CoreError;
use wayfarer_core::recommendation::{self, Recommendation};

use super::validate_input;
use super::UserRepo;
use crate::models::itinerary::{CreateItinerary, Itinerary, ItineraryEnvelope};
use crate::store::StoreError;
use crate::{DataStore, DbError};

/// Append-only itinerary storage plus search and recommendations.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// The whole envelope; empty when nothing has been stored yet.
    pub async fn load(store: &DataStore) -> Result<ItineraryEnvelope, StoreError> {
        store.itineraries().read().await
    }

    pub async fn list(store: &DataStore) -> Result<Vec<Itinerary>, StoreError> {
        Ok(Self::load(store).await?.itineraries)
    }

    /// Validate and append one itinerary at the end of the collection.
    pub async fn append(store: &DataStore, input: CreateItinerary) -> Result<(), DbError> {
        validate_input(&input)?;

        let city = input.itinerary_data.city_name.clone();
        let count = store
            .itineraries()
            .modify(|envelope: &mut ItineraryEnvelope| {
                envelope.itineraries.push(input);
                Ok::<_, DbError>(envelope.itineraries.len())
            })
            .await?;

        tracing::info!(city = %city, count, "Itinerary appended");
        Ok(())
    }

    /// Itineraries whose city name equals `city` exactly.
    pub async fn search_by_city(store: &DataStore, city: &str) -> Result<Vec<Itinerary>, StoreError> {
        let matches: Vec<Itinerary> = Self::list(store)
            .await?
            .into_iter()
            .filter(|it| it.itinerary_data.city_name == city)
            .collect();

        tracing::debug!(city, matches = matches.len(), "Itinerary search");
        Ok(matches)
    }

    /// Recommend itineraries for `user_id` based on the user's flight origin.
    pub async fn recommend(
        store: &DataStore,
        user_id: &str,
    ) -> Result<Recommendation<Itinerary>, DbError> {
        let user = UserRepo::find_by_id(store, user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", user_id))?;

        let itineraries = Self::list(store).await?;
        let rec = recommendation::recommend(user.origin(), itineraries)?;

        tracing::debug!(
            user_id,
            origin = user.origin().unwrap_or_default(),
            fallback = rec.is_fallback(),
            "Recommendations computed"
        );
        Ok(rec)
    }
}
