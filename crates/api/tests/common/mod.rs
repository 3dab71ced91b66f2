#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use wayfarer_api::config::ServerConfig;
use wayfarer_api::router::build_app_router;
use wayfarer_api::state::AppState;
use wayfarer_geo::{Coordinates, GeoError, Geocoder};

/// A test environment: a temp data directory and the store rooted in it.
pub struct TestEnv {
    pub dir: tempfile::TempDir,
    pub state: AppState,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_geocoder(StubGeocoder::default())
    }

    pub fn with_geocoder(geocoder: StubGeocoder) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let state = AppState {
            store: Arc::new(wayfarer_db::open_store(dir.path())),
            config: Arc::new(config),
            geocoder: Arc::new(geocoder),
        };
        Self { dir, state }
    }

    /// A fresh router sharing this environment's state.
    pub fn app(&self) -> Router {
        build_app_router(self.state.clone(), &self.state.config)
    }

    pub fn data_file(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(data_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        geocoder_url: "http://geocoder.invalid".to_string(),
        geocoder_user_agent: "wayfarer-tests".to_string(),
    }
}

/// Geocoder answering from a fixed table; unknown cities are `NotFound`,
/// the city `"Offline"` simulates an upstream outage.
#[derive(Default)]
pub struct StubGeocoder {
    pub known: HashMap<String, Coordinates>,
}

impl StubGeocoder {
    pub fn with(mut self, city: &str, latitude: f64, longitude: f64) -> Self {
        self.known.insert(
            city.to_string(),
            Coordinates {
                latitude,
                longitude,
            },
        );
        self
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, city: &str) -> Result<Coordinates, GeoError> {
        if city == "Offline" {
            return Err(GeoError::Api {
                status: 503,
                body: "maintenance".to_string(),
            });
        }
        self.known
            .get(city)
            .copied()
            .ok_or_else(|| GeoError::NotFound(city.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
