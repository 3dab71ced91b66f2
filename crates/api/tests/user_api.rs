//! HTTP-level integration tests for the `/users` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, put_json, TestEnv};
use serde_json::json;

fn user_payload(origin: &str, flight: f64, hotel: f64, itinerary: f64) -> serde_json::Value {
    json!({
        "name": format!("from {origin}"),
        "flight_data": {"origin": origin, "flight_cost": flight},
        "hotel_data": {"hotel_cost": hotel},
        "itinerary_data": {"city_name": origin, "itinerary_cost": itinerary},
        "user_data": {}
    })
}

async fn create_user(env: &TestEnv, payload: serde_json::Value) -> String {
    let response = post_json(env.app(), "/api/v1/users", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_returns_201_with_id() {
    let env = TestEnv::new();
    let response = post_json(env.app(), "/api/v1/users", user_payload("Lisbon", 100.0, 50.0, 25.0)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User created");
    assert_eq!(json["id"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn created_user_has_computed_total() {
    let env = TestEnv::new();
    let id = create_user(&env, user_payload("Lisbon", 100.0, 50.0, 25.0)).await;

    let response = get(env.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id.as_str());
    assert_eq!(json["data"]["user_data"]["total_cost"], 175.0);
    assert_eq!(json["data"]["name"], "from Lisbon");
}

#[tokio::test]
async fn missing_costs_default_to_zero() {
    let env = TestEnv::new();
    let id = create_user(
        &env,
        json!({"flight_data": {}, "hotel_data": {"hotel_cost": 12.5}, "itinerary_data": {}}),
    )
    .await;

    let json = body_json(get(env.app(), &format!("/api/v1/users/{id}")).await).await;
    assert_eq!(json["data"]["flight_data"]["flight_cost"], 0.0);
    assert_eq!(json["data"]["user_data"]["total_cost"], 12.5);
}

#[tokio::test]
async fn create_without_trip_groups_is_validation_error() {
    let env = TestEnv::new();
    let response = post_json(env.app(), "/api/v1/users", json!({"flight_data": {}})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(!env.data_file("users.json").exists());
}

#[tokio::test]
async fn list_users_returns_all() {
    let env = TestEnv::new();
    create_user(&env, user_payload("A", 1.0, 1.0, 1.0)).await;
    create_user(&env, user_payload("B", 1.0, 1.0, 1.0)).await;

    let response = get(env.app(), "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_users_on_fresh_store_is_empty() {
    let env = TestEnv::new();
    let json = body_json(get(env.app(), "/api/v1/users").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn get_nonexistent_user_returns_404() {
    let env = TestEnv::new();
    let response = get(env.app(), "/api/v1/users/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_top_level_fields() {
    let env = TestEnv::new();
    let id = create_user(&env, user_payload("Rome", 10.0, 20.0, 30.0)).await;

    let response = put_json(
        env.app(),
        &format!("/api/v1/users/{id}"),
        json!({"name": "Renamed", "email": "r@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Renamed");

    let json = body_json(get(env.app(), &format!("/api/v1/users/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Renamed");
    assert_eq!(json["data"]["email"], "r@example.com");
    assert_eq!(json["data"]["flight_data"]["origin"], "Rome");
    assert_eq!(json["data"]["user_data"]["total_cost"], 60.0);
}

#[tokio::test]
async fn update_nonexistent_user_returns_404() {
    let env = TestEnv::new();
    let response = put_json(env.app(), "/api/v1/users/ghost", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let env = TestEnv::new();
    let id = create_user(&env, user_payload("Oslo", 1.0, 1.0, 1.0)).await;

    let response = delete(env.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(env.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(env.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Copy itinerary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn copy_itinerary_overwrites_target_trip() {
    let env = TestEnv::new();
    let source = create_user(&env, user_payload("Paris", 300.0, 200.0, 100.0)).await;
    let target = create_user(&env, user_payload("Berlin", 1.0, 1.0, 1.0)).await;

    let response = post_empty(
        env.app(),
        &format!("/api/v1/users/{source}/copy-itinerary/{target}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(env.app(), &format!("/api/v1/users/{target}")).await).await;
    assert_eq!(json["data"]["flight_data"]["origin"], "Paris");
    assert_eq!(json["data"]["itinerary_data"]["city_name"], "Paris");
    assert_eq!(json["data"]["user_data"]["total_cost"], 600.0);
    assert_eq!(json["data"]["name"], "from Berlin");
}

#[tokio::test]
async fn copy_itinerary_with_unknown_user_returns_404() {
    let env = TestEnv::new();
    let id = create_user(&env, user_payload("Paris", 1.0, 1.0, 1.0)).await;

    let response = post_empty(env.app(), &format!("/api/v1/users/{id}/copy-itinerary/ghost")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recommendations_prefer_origin_city() {
    let env = TestEnv::new();
    for (city, rating) in [("Paris", 4), ("Rome", 5), ("Paris", 2)] {
        let response = post_json(
            env.app(),
            "/api/v1/itineraries",
            json!({"itinerary_data": {"city_name": city, "rating": rating}}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let id = create_user(&env, user_payload("Paris", 1.0, 1.0, 1.0)).await;

    let response = get(env.app(), &format!("/api/v1/users/{id}/recommendations")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["itinerary_data"]["rating"], 4.0);
    assert_eq!(recs[1]["itinerary_data"]["rating"], 2.0);
}

#[tokio::test]
async fn recommendations_fall_back_to_top_rated() {
    let env = TestEnv::new();
    for (city, rating) in [("Paris", 4), ("Rome", 5)] {
        post_json(
            env.app(),
            "/api/v1/itineraries",
            json!({"itinerary_data": {"city_name": city, "rating": rating}}),
        )
        .await;
    }
    let id = create_user(&env, user_payload("Tokyo", 1.0, 1.0, 1.0)).await;

    let json = body_json(get(env.app(), &format!("/api/v1/users/{id}/recommendations")).await).await;
    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["itinerary_data"]["city_name"], "Rome");
}

#[tokio::test]
async fn recommendations_for_unknown_user_return_404() {
    let env = TestEnv::new();
    let response = get(env.app(), "/api/v1/users/ghost/recommendations").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn recommendations_without_itineraries_return_empty_collection() {
    let env = TestEnv::new();
    let id = create_user(&env, user_payload("Paris", 1.0, 1.0, 1.0)).await;

    let response = get(env.app(), &format!("/api/v1/users/{id}/recommendations")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "EMPTY_COLLECTION");
}
