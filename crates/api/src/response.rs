//! Shared response envelope types for API handlers.
//!
//! Read endpoints answer with `{ "data": ... }`; mutations answer with a
//! `{ "message": ... }` acknowledgement, optionally carrying the new id or
//! the affected record.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement for a mutation.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize = ()> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl MessageResponse<()> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
            data: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: Some(id.into()),
            data: None,
        }
    }
}

impl<T: Serialize> MessageResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            id: None,
            data: Some(data),
        }
    }
}
