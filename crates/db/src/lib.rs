pub mod models;
pub mod repositories;
pub mod store;

use std::path::{Path, PathBuf};

use wayfarer_core::error::CoreError;

pub use store::{Collection, StoreError};

/// File names of the four collections inside the data directory.
pub const USERS_FILE: &str = "users.json";
pub const ITINERARIES_FILE: &str = "itineraries.json";
pub const FLIGHTS_FILE: &str = "flights.json";
pub const DESTINATIONS_FILE: &str = "destinations.json";

/// Errors returned by repository operations: a domain failure or a storage failure.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handles to every collection, built once at startup and shared by reference.
#[derive(Debug)]
pub struct DataStore {
    data_dir: PathBuf,
    users: Collection,
    itineraries: Collection,
    flights: Collection,
    destinations: Collection,
}

impl DataStore {
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn users(&self) -> &Collection {
        &self.users
    }

    pub fn itineraries(&self) -> &Collection {
        &self.itineraries
    }

    pub fn flights(&self) -> &Collection {
        &self.flights
    }

    pub fn destinations(&self) -> &Collection {
        &self.destinations
    }
}

/// Build a store rooted at `data_dir`. No files are touched.
pub fn open_store(data_dir: impl Into<PathBuf>) -> DataStore {
    let data_dir = data_dir.into();
    DataStore {
        users: Collection::new("users", data_dir.join(USERS_FILE)),
        itineraries: Collection::new("itineraries", data_dir.join(ITINERARIES_FILE)),
        flights: Collection::new("flights", data_dir.join(FLIGHTS_FILE)),
        destinations: Collection::new("destinations", data_dir.join(DESTINATIONS_FILE)),
        data_dir,
    }
}

/// Create the data directory if it does not exist yet.
pub async fn ensure_data_dir(store: &DataStore) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(store.data_dir())
        .await
        .map_err(|source| StoreError::Io {
            path: store.data_dir().to_path_buf(),
            source,
        })
}

/// Verify the data directory is present and is a directory.
pub async fn health_check(store: &DataStore) -> Result<(), StoreError> {
    let metadata = tokio::fs::metadata(store.data_dir())
        .await
        .map_err(|source| StoreError::Io {
            path: store.data_dir().to_path_buf(),
            source,
        })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(StoreError::Io {
            path: store.data_dir().to_path_buf(),
            source: std::io::Error::other("not a directory"),
        })
    }
}
