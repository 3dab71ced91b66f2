//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `wayfarer_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod city;
pub mod flight;
pub mod itinerary;
pub mod maps;
pub mod user;

use serde::de::DeserializeOwned;
use wayfarer_core::error::CoreError;

use crate::error::AppResult;

/// Decode a raw JSON body into a DTO, reporting shape problems as
/// validation errors rather than extractor rejections.
pub(crate) fn parse_payload<T: DeserializeOwned>(
    entity: &str,
    payload: serde_json::Value,
) -> AppResult<T> {
    if !payload.is_object() {
        return Err(CoreError::Validation(format!("{entity} payload must be a JSON object")).into());
    }
    serde_json::from_value(payload)
        .map_err(|e| CoreError::Validation(format!("Invalid {entity} payload: {e}")).into())
}
