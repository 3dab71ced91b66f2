//! Integration tests for city metadata lookups.

use assert_matches::assert_matches;
use serde_json::json;
use wayfarer_core::error::CoreError;
use wayfarer_db::repositories::CityInfoRepo;
use wayfarer_db::{open_store, DataStore, DbError};

fn temp_store() -> (tempfile::TempDir, DataStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    (dir, store)
}

async fn write_destinations(store: &DataStore) {
    tokio::fs::write(
        store.destinations().path(),
        json!({"destinations": [
            {"city": "Lisbon", "country": "Portugal", "language": "pt"},
            {"city": "Kyoto", "country": "Japan"}
        ]})
        .to_string(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn known_city_returns_its_metadata() {
    let (_dir, store) = temp_store();
    write_destinations(&store).await;

    let info = CityInfoRepo::get_by_city(&store, "Lisbon").await.unwrap();
    assert_eq!(info.city, "Lisbon");
    assert_eq!(info.extra["country"], "Portugal");
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let (_dir, store) = temp_store();
    write_destinations(&store).await;

    let err = CityInfoRepo::get_by_city(&store, "Atlantis").await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { entity: "City", .. }));
}

#[tokio::test]
async fn missing_file_is_storage_missing() {
    let (_dir, store) = temp_store();

    let err = CityInfoRepo::get_by_city(&store, "Lisbon").await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::StorageMissing("destinations")));
}

#[tokio::test]
async fn malformed_file_is_a_parse_error() {
    let (_dir, store) = temp_store();
    tokio::fs::write(store.destinations().path(), "{\"destinations\": [").await.unwrap();

    let err = CityInfoRepo::get_by_city(&store, "Lisbon").await.unwrap_err();
    assert_matches!(err, DbError::Store(wayfarer_db::StoreError::Parse { .. }));
}
