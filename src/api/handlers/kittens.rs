//! Kitten CRUD handlers.
//!
//! Every operation here is scoped to the authenticated owner. A kitten
//! that does not exist and a kitten owned by someone else produce the
//! same 401 response: the API does not reveal whether an id exists to
//! callers who do not own it.

use crate::{
    auth::middleware::AuthUser,
    types::{AppError, CreateKittenRequest, KittenResponse, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Get a kitten by id.
#[utoipa::path(
    get,
    path = "/kittens/{id}",
    params(
        ("id" = i64, Path, description = "Kitten ID")
    ),
    responses(
        (status = 200, description = "Kitten details", body = KittenResponse),
        (status = 401, description = "Unauthenticated, not the owner, or no such kitten")
    ),
    tag = "kittens",
    security(("bearer" = []))
)]
pub async fn get_kitten(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<KittenResponse>> {
    let kitten = state
        .store
        .get_kitten(id)
        .await?
        .filter(|k| k.owner_id == claims.sub)
        .ok_or_else(|| AppError::Auth("Not authorized to access this kitten".to_string()))?;

    Ok(Json(KittenResponse {
        name: kitten.name,
        age: kitten.age,
        color: kitten.color,
    }))
}

/// Create a kitten owned by the caller.
#[utoipa::path(
    post,
    path = "/kittens",
    request_body = CreateKittenRequest,
    responses(
        (status = 201, description = "Kitten created", body = KittenResponse),
        (status = 400, description = "Invalid kitten fields"),
        (status = 401, description = "Unauthenticated")
    ),
    tag = "kittens",
    security(("bearer" = []))
)]
pub async fn create_kitten(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateKittenRequest>,
) -> Result<(StatusCode, Json<KittenResponse>)> {
    // Validate input
    if payload.name.trim().is_empty() || payload.color.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "name and color are required".to_string(),
        ));
    }
    if payload.age < 0 {
        return Err(AppError::InvalidInput(
            "age must be non-negative".to_string(),
        ));
    }

    let id = state
        .store
        .create_kitten(&payload.name, payload.age, &payload.color, &claims.sub)
        .await?;

    tracing::debug!("user {} created kitten {}", claims.sub, id);

    Ok((
        StatusCode::CREATED,
        Json(KittenResponse {
            name: payload.name,
            age: payload.age,
            color: payload.color,
        }),
    ))
}

/// Delete a kitten owned by the caller.
#[utoipa::path(
    delete,
    path = "/kittens/{id}",
    params(
        ("id" = i64, Path, description = "Kitten ID")
    ),
    responses(
        (status = 204, description = "Kitten deleted"),
        (status = 401, description = "Unauthenticated, not the owner, or no such kitten")
    ),
    tag = "kittens",
    security(("bearer" = []))
)]
pub async fn delete_kitten(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    // Verify kitten belongs to the caller
    state
        .store
        .get_kitten(id)
        .await?
        .filter(|k| k.owner_id == claims.sub)
        .ok_or_else(|| AppError::Auth("Not authorized to delete this kitten".to_string()))?;

    state.store.delete_kitten(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
