use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfarer_core::error::CoreError;
use wayfarer_db::{DbError, StoreError};
use wayfarer_geo::GeoError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`StoreError`] for storage
/// failures and [`GeoError`] for the geocoding collaborator. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wayfarer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `wayfarer_db`.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A geocoding failure.
    #[error("Geocoding error: {0}")]
    Geo(#[from] GeoError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Store(store) => AppError::Store(store),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} '{id}' not found"),
                ),
                CoreError::StorageMissing(collection) => {
                    tracing::error!(collection, "Collection storage is missing");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "STORAGE_MISSING",
                        format!("No data available for {collection}"),
                    )
                }
                CoreError::EmptyCollection(collection) => (
                    StatusCode::NOT_FOUND,
                    "EMPTY_COLLECTION",
                    format!("No {collection} available"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Geocoding errors ---
            AppError::Geo(err) => match err {
                GeoError::NotFound(city) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("No coordinates found for city '{city}'"),
                ),
                other => {
                    tracing::error!(error = %other, "Geocoding failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "GEOCODING_ERROR",
                        "The geocoding service is unavailable".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a storage error into an HTTP status, error code, and message.
///
/// - Malformed stored content maps to 500 `DATA_CORRUPTED`.
/// - Everything else maps to 500 `INTERNAL_ERROR`.
///
/// Paths and parser details are logged, never returned.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Parse { path, source } => {
            tracing::error!(path = %path.display(), error = %source, "Stored data is malformed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_CORRUPTED",
                "Stored data could not be read".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Storage error");
            internal()
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
