//! Flight record model and envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;
use wayfarer_core::types::Amount;

use super::ExtraFields;

/// A stored flight, kept as the raw object it was written as.
///
/// Older records may lack `origin` or `cost`, or hold them with an
/// unexpected type. Such values are preserved on disk and read back as
/// absent through the accessors, so one odd record never makes the whole
/// collection unreadable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flight {
    pub fields: ExtraFields,
}

impl Flight {
    pub fn origin(&self) -> Option<&str> {
        self.fields.get("origin").and_then(Value::as_str)
    }

    pub fn cost(&self) -> Option<Amount> {
        self.fields.get("cost").and_then(Value::as_f64)
    }

    pub fn departs_from(&self, city: &str) -> bool {
        self.origin() == Some(city)
    }
}

/// `{"flights": [...]}` as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightEnvelope {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// DTO for appending a flight. New records must carry both fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFlight {
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(range(min = 0.0))]
    pub cost: Amount,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl From<CreateFlight> for Flight {
    fn from(input: CreateFlight) -> Self {
        let mut fields = input.extra;
        fields.insert("origin".into(), Value::from(input.origin));
        fields.insert("cost".into(), Value::from(input.cost));
        Self { fields }
    }
}
