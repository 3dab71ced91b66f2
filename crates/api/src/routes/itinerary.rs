//! Route definitions for the `/itineraries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::itinerary;
use crate::state::AppState;

/// Routes mounted at `/itineraries`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /search/{city}   -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(itinerary::list).post(itinerary::create))
        .route("/search/{city}", get(itinerary::search))
}
