//! Handlers for the `/itineraries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_db::models::itinerary::{CreateItinerary, Itinerary};
use wayfarer_db::repositories::ItineraryRepo;

use super::parse_payload;
use crate::error::AppResult;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/itineraries
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input: CreateItinerary = parse_payload("itinerary", payload)?;
    ItineraryRepo::append(&state.store, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Itinerary added")),
    ))
}

/// GET /api/v1/itineraries
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Itinerary>>>> {
    let itineraries = ItineraryRepo::list(&state.store).await?;
    Ok(Json(DataResponse { data: itineraries }))
}

/// GET /api/v1/itineraries/search/{city}
///
/// An empty result is reported as 404.
pub async fn search(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Itinerary>>>> {
    let matches = ItineraryRepo::search_by_city(&state.store, &city).await?;
    if matches.is_empty() {
        return Err(CoreError::not_found("Itinerary in city", city).into());
    }
    Ok(Json(DataResponse { data: matches }))
}
