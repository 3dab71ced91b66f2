//! Handler for city metadata.

use axum::extract::{Path, State};
use axum::Json;
use wayfarer_db::models::destination::Destination;
use wayfarer_db::repositories::CityInfoRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cities/{name}
///
/// Unknown city → 404 `NOT_FOUND`; missing data file → 503 `STORAGE_MISSING`.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<Destination>>> {
    let info = CityInfoRepo::get_by_city(&state.store, &name).await?;
    Ok(Json(DataResponse { data: info }))
}
