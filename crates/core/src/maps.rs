//! Map link construction for resolved coordinates.

use serde::Serialize;

/// Base URL for place links.
pub const MAP_PLACE_BASE_URL: &str = "https://www.google.com/maps/place";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Build a map link pointing at `coords`.
pub fn map_link(coords: Coordinates) -> String {
    format!(
        "{MAP_PLACE_BASE_URL}/{},{}",
        coords.latitude, coords.longitude
    )
}
