//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize + Deserialize` record struct matching the stored JSON,
//!   with a flattened `extra` map so unknown fields survive a round trip
//! - A `Deserialize` create DTO for appends
//! - The envelope type when the collection is stored wrapped

pub mod destination;
pub mod flight;
pub mod itinerary;
pub mod user;

/// Unknown fields carried alongside the typed ones.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
