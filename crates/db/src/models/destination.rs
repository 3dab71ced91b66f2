//! City information records.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Descriptive metadata about one city. Everything besides `city` is free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub city: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `{"destinations": [...]}` as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DestinationEnvelope {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
