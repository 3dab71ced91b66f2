pub mod flight;
pub mod health;
pub mod itinerary;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                          list, create
/// /users/{id}                                     get, update (merge), delete
/// /users/{id}/recommendations                     personalized recommendations
/// /users/{id}/copy-itinerary/{target_id}          copy trip from {id} (POST)
///
/// /itineraries                                    list, create
/// /itineraries/search/{city}                      search by city
///
/// /flights                                        list, create
/// /flights/search/{city}                          search by origin
///
/// /cities/{name}                                  city metadata
///
/// /maps/coordinates?origin=&destination=          geocode + map links
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/itineraries", itinerary::router())
        .nest("/flights", flight::router())
        .route("/cities/{name}", get(handlers::city::get_by_name))
        .route("/maps/coordinates", get(handlers::maps::coordinates))
}
