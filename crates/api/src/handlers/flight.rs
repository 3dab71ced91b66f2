//! Handlers for the `/flights` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_db::models::flight::{CreateFlight, Flight};
use wayfarer_db::repositories::FlightRepo;

use super::parse_payload;
use crate::error::AppResult;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/flights
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input: CreateFlight = parse_payload("flight", payload)?;
    FlightRepo::append(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Flight added"))))
}

/// GET /api/v1/flights
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Flight>>>> {
    let flights = FlightRepo::list(&state.store).await?;
    Ok(Json(DataResponse { data: flights }))
}

/// GET /api/v1/flights/search/{city}
///
/// An empty result is reported as 404.
pub async fn search(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Flight>>>> {
    let matches = FlightRepo::search_by_origin(&state.store, &city).await?;
    if matches.is_empty() {
        return Err(CoreError::not_found("Flight from city", city).into());
    }
    Ok(Json(DataResponse { data: matches }))
}
