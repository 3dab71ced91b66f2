//! Read-only lookups in the `destinations` collection.

use wayfarer_core::error::CoreError;

use crate::models::destination::{Destination, DestinationEnvelope};
use crate::{DataStore, DbError};

pub struct CityInfoRepo;

impl CityInfoRepo {
    /// Metadata for `name`.
    ///
    /// A missing data file is reported as [`CoreError::StorageMissing`],
    /// distinct from [`CoreError::NotFound`] for an unknown city.
    pub async fn get_by_city(store: &DataStore, name: &str) -> Result<Destination, DbError> {
        let collection = store.destinations();
        if !collection.exists().await? {
            tracing::warn!(path = %collection.path().display(), "City info file is missing");
            return Err(CoreError::StorageMissing(collection.name()).into());
        }

        let envelope: DestinationEnvelope = collection.read().await?;
        envelope
            .destinations
            .into_iter()
            .find(|d| d.city == name)
            .ok_or_else(|| CoreError::not_found("City", name).into())
    }
}
