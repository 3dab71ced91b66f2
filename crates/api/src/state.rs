use std::sync::Arc;

use wayfarer_db::DataStore;
use wayfarer_geo::Geocoder;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The one set of collection handles for this process.
    pub store: Arc<DataStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Coordinate lookup collaborator.
    pub geocoder: Arc<dyn Geocoder>,
}
