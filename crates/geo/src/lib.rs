//! Coordinate lookup for city names.
//!
//! The API depends on the [`Geocoder`] trait only; [`NominatimClient`] is
//! the production implementation backed by the OpenStreetMap search API.

pub mod nominatim;

use async_trait::async_trait;
pub use nominatim::NominatimClient;
pub use wayfarer_core::maps::Coordinates;

/// Errors from the geocoding layer.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream service returned a non-2xx status code.
    #[error("Geocoding API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The service answered but knows no place by that name.
    #[error("No coordinates found for city: {0}")]
    NotFound(String),

    /// The response could not be interpreted.
    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),
}

/// Resolves a free-text city name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, city: &str) -> Result<Coordinates, GeoError>;
}
