//! Repository for the `users` collection.

use serde_json::Value;
use wayfarer_core::error::CoreError;
use wayfarer_core::types::{self, RecordId};

use super::validate_input;
use crate::models::user::{CreateUser, User};
use crate::store::StoreError;
use crate::{DataStore, DbError};

const ENTITY: &str = "User";

/// Lifecycle operations for users.
pub struct UserRepo;

impl UserRepo {
    /// A fresh random identifier.
    pub fn generate_id() -> RecordId {
        types::generate_id()
    }

    /// Validate `input`, assign an id, compute the total cost and append.
    pub async fn create(store: &DataStore, input: CreateUser) -> Result<User, DbError> {
        validate_input(&input)?;

        let user = input.into_user(Self::generate_id(), chrono::Utc::now());
        let created = user.clone();
        store
            .users()
            .modify(|users: &mut Vec<User>| {
                users.push(user);
                Ok::<_, DbError>(())
            })
            .await?;

        tracing::info!(user_id = %created.id, total_cost = created.user_data.total_cost, "User created");
        Ok(created)
    }

    /// All users in stored order.
    pub async fn list(store: &DataStore) -> Result<Vec<User>, StoreError> {
        store.users().read().await
    }

    /// First user whose id equals `id`.
    pub async fn find_by_id(store: &DataStore, id: &str) -> Result<Option<User>, StoreError> {
        let users: Vec<User> = store.users().read().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Shallow-merge the top-level keys of `partial` into the user.
    ///
    /// The total cost is left alone unless `partial` supplies `user_data`.
    pub async fn update(store: &DataStore, id: &str, partial: &Value) -> Result<User, DbError> {
        let fields = partial
            .as_object()
            .ok_or_else(|| CoreError::Validation("update payload must be a JSON object".into()))?;

        let updated = store
            .users()
            .modify(|users: &mut Vec<User>| {
                let slot = users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
                *slot = merge_fields(slot, fields)?;
                Ok::<_, DbError>(slot.clone())
            })
            .await?;

        tracing::info!(user_id = %id, fields = fields.len(), "User updated");
        Ok(updated)
    }

    /// Remove the user with `id`.
    pub async fn delete(store: &DataStore, id: &str) -> Result<(), DbError> {
        store
            .users()
            .modify(|users: &mut Vec<User>| {
                let idx = users
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
                users.remove(idx);
                Ok::<_, DbError>(())
            })
            .await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Copy the source user's flight, hotel and itinerary records onto the
    /// target and recompute the target's total.
    pub async fn copy_itinerary(
        store: &DataStore,
        source_id: &str,
        target_id: &str,
    ) -> Result<User, DbError> {
        let updated = store
            .users()
            .modify(|users: &mut Vec<User>| {
                let source = users
                    .iter()
                    .find(|u| u.id == source_id)
                    .cloned()
                    .ok_or_else(|| CoreError::not_found(ENTITY, source_id))?;
                let target = users
                    .iter_mut()
                    .find(|u| u.id == target_id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, target_id))?;
                target.copy_trip_from(&source);
                Ok::<_, DbError>(target.clone())
            })
            .await?;

        tracing::info!(source_id, target_id, "Itinerary copied between users");
        Ok(updated)
    }
}

/// Overlay `fields` onto `user` key by key and re-parse the result.
fn merge_fields(
    user: &User,
    fields: &serde_json::Map<String, Value>,
) -> Result<User, CoreError> {
    if let Some(new_id) = fields.get("id") {
        if new_id.as_str() != Some(user.id.as_str()) {
            return Err(CoreError::Validation("user id cannot be changed".into()));
        }
    }

    let mut value =
        serde_json::to_value(user).map_err(|e| CoreError::Internal(e.to_string()))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| CoreError::Internal("user did not serialize to an object".into()))?;
    for (key, field) in fields {
        object.insert(key.clone(), field.clone());
    }

    let merged: User = serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("update produces an invalid user: {e}")))?;
    merged.costs().validate()?;
    Ok(merged)
}
