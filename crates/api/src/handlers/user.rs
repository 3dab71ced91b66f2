//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use wayfarer_core::error::CoreError;
use wayfarer_db::models::itinerary::Itinerary;
use wayfarer_db::models::user::{CreateUser, User};
use wayfarer_db::repositories::{ItineraryRepo, UserRepo};

use super::parse_payload;
use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// `{ "recommendations": [...] }`
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Itinerary>,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input: CreateUser = parse_payload("user", payload)?;
    let user = UserRepo::create(&state.store, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("User created", user.id)),
    ))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.store).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_id(&state.store, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/{id}
///
/// Shallow merge of the body's top-level keys into the stored user.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(partial): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse<User>>> {
    let user = UserRepo::update(&state.store, &id, &partial).await?;
    Ok(Json(MessageResponse::with_data(
        format!("User {id} updated"),
        user,
    )))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    UserRepo::delete(&state.store, &id).await?;
    Ok(Json(MessageResponse::new(format!("User {id} deleted"))))
}

/// POST /api/v1/users/{id}/copy-itinerary/{target_id}
///
/// `{id}` is the source user; the target receives the copy.
pub async fn copy_itinerary(
    State(state): State<AppState>,
    Path((source_id, target_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse<User>>> {
    let user = UserRepo::copy_itinerary(&state.store, &source_id, &target_id).await?;
    Ok(Json(MessageResponse::with_data("Itinerary copied", user)))
}

/// GET /api/v1/users/{id}/recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RecommendationsResponse>> {
    let rec = ItineraryRepo::recommend(&state.store, &id).await?;
    Ok(Json(RecommendationsResponse {
        recommendations: rec.into_vec(),
    }))
}
