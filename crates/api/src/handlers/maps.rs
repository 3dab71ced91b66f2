//! Coordinates and map links for an origin/destination pair.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use wayfarer_core::maps::{map_link, Coordinates};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoordinatesParams {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Serialize)]
pub struct CityCoordinates {
    pub role: &'static str,
    pub city: String,
    pub coordinates: PlacedCoordinates,
}

#[derive(Debug, Serialize)]
pub struct PlacedCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub map_link: String,
}

#[derive(Debug, Serialize)]
pub struct CoordinatesResponse {
    pub cities: Vec<CityCoordinates>,
}

impl From<Coordinates> for PlacedCoordinates {
    fn from(coords: Coordinates) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            map_link: map_link(coords),
        }
    }
}

/// GET /api/v1/maps/coordinates?origin=..&destination=..
pub async fn coordinates(
    State(state): State<AppState>,
    Query(params): Query<CoordinatesParams>,
) -> AppResult<Json<CoordinatesResponse>> {
    let mut cities = Vec::with_capacity(2);
    for (role, city) in [("origin", params.origin), ("destination", params.destination)] {
        if city.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{role} must not be empty")));
        }
        let coords = state.geocoder.resolve(&city).await?;
        cities.push(CityCoordinates {
            role,
            city,
            coordinates: coords.into(),
        });
    }
    Ok(Json(CoordinatesResponse { cities }))
}
