/// User identifiers are random UUID v4 strings.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Costs and ratings are stored as JSON numbers.
pub type Amount = f64;

/// Generate a fresh user identifier.
pub fn generate_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}
