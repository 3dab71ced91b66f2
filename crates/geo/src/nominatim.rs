//! Nominatim (OpenStreetMap) search client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{Coordinates, GeoError, Geocoder};

/// Public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// HTTP client for a Nominatim instance.
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

/// One entry of the `/search?format=json` response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl NominatimClient {
    /// * `base_url` - e.g. `https://nominatim.openstreetmap.org`.
    /// * `user_agent` - Nominatim's usage policy requires an identifying agent.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, city: &str) -> Result<Coordinates, GeoError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(city, status = status.as_u16(), "Geocoding request rejected");
            return Err(GeoError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let coords = parse_search_response(city, &body)?;
        tracing::debug!(city, lat = coords.latitude, lon = coords.longitude, "City geocoded");
        Ok(coords)
    }
}

/// Take the first hit of a Nominatim search response.
fn parse_search_response(city: &str, body: &str) -> Result<Coordinates, GeoError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| GeoError::InvalidResponse(e.to_string()))?;
    let first = hits
        .into_iter()
        .next()
        .ok_or_else(|| GeoError::NotFound(city.to_string()))?;

    let parse = |label: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|e| GeoError::InvalidResponse(format!("{label} '{raw}': {e}")))
    };

    Ok(Coordinates {
        latitude: parse("lat", &first.lat)?,
        longitude: parse("lon", &first.lon)?,
    })
}
