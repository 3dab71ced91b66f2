//! Repository for the `flights` collection.

use super::validate_input;
use crate::models::flight::{CreateFlight, Flight, FlightEnvelope};
use crate::store::StoreError;
use crate::{DataStore, DbError};

/// Append-only flight storage with origin search.
///
/// The flights collection handle is owned by the [`DataStore`], which the
/// API builds once and shares; there is no per-call reopening.
pub struct FlightRepo;

impl FlightRepo {
    pub async fn load(store: &DataStore) -> Result<FlightEnvelope, StoreError> {
        store.flights().read().await
    }

    pub async fn list(store: &DataStore) -> Result<Vec<Flight>, StoreError> {
        Ok(Self::load(store).await?.flights)
    }

    pub async fn append(store: &DataStore, input: CreateFlight) -> Result<Flight, DbError> {
        validate_input(&input)?;

        let flight = Flight::from(input);
        let stored = flight.clone();
        store
            .flights()
            .modify(|envelope: &mut FlightEnvelope| {
                envelope.flights.push(flight);
                Ok::<_, DbError>(())
            })
            .await?;

        tracing::info!(origin = stored.origin().unwrap_or_default(), "Flight appended");
        Ok(stored)
    }

    /// Flights departing from `city`. Records without an origin never match.
    pub async fn search_by_origin(store: &DataStore, city: &str) -> Result<Vec<Flight>, StoreError> {
        let matches: Vec<Flight> = Self::list(store)
            .await?
            .into_iter()
            .filter(|f| f.departs_from(city))
            .collect();

        tracing::debug!(city, matches = matches.len(), "Flight search");
        Ok(matches)
    }
}
