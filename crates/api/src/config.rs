use std::path::PathBuf;

use wayfarer_geo::nominatim::DEFAULT_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the JSON collections (default: `data`).
    pub data_dir: PathBuf,
    /// Base URL of the Nominatim instance used for geocoding.
    pub geocoder_url: String,
    /// User agent sent to the geocoder.
    pub geocoder_user_agent: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                              |
    /// | `PORT`                 | `3000`                                 |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                   |
    /// | `DATA_DIR`             | `data`                                 |
    /// | `GEOCODER_URL`         | `https://nominatim.openstreetmap.org`  |
    /// | `GEOCODER_USER_AGENT`  | `wayfarer/<crate version>`             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let geocoder_url =
            std::env::var("GEOCODER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let geocoder_user_agent = std::env::var("GEOCODER_USER_AGENT")
            .unwrap_or_else(|_| format!("wayfarer/{}", env!("CARGO_PKG_VERSION")));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            geocoder_url,
            geocoder_user_agent,
        }
    }
}
