//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /{id}                                  -> get_by_id
/// PUT    /{id}                                  -> update
/// DELETE /{id}                                  -> delete
/// GET    /{id}/recommendations                  -> recommendations
/// POST   /{id}/copy-itinerary/{target_id}       -> copy_itinerary (id = source)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route("/{id}/recommendations", get(user::recommendations))
        .route(
            "/{id}/copy-itinerary/{target_id}",
            post(user::copy_itinerary),
        )
}
