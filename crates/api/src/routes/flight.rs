//! Route definitions for the `/flights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flight;
use crate::state::AppState;

/// Routes mounted at `/flights`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /search/{city}   -> search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flight::list).post(flight::create))
        .route("/search/{city}", get(flight::search))
}
