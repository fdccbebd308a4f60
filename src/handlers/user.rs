use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use crate::{
    db::UserFilter,
    error::{AppError, Result},
    handlers::{AppState, JsonBody, JsonPath},
    models::user::{Credentials, User},
};

/// Register a new user
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<impl IntoResponse> {
    state.auth_service.register(credentials).await?;
    Ok((StatusCode::OK, Json("User Added")))
}

/// Check a username/password pair
pub async fn verify_user(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<impl IntoResponse> {
    if !state.auth_service.verify(credentials).await? {
        return Err(AppError::Unauthorized);
    }
    Ok((StatusCode::OK, Json("User Verified")))
}

/// Get all users handler
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_store.find_all(None).await?;
    Ok((StatusCode::OK, Json(users)))
}

/// Get user by ID handler
pub async fn get_user_by_id(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<i64>,
) -> Result<impl IntoResponse> {
    let user = state.user_store.find_one(UserFilter::Id(id)).await?;
    Ok((StatusCode::OK, Json(user_or_empty(user)?)))
}

/// Get user by username handler
pub async fn get_user_by_username(
    State(state): State<AppState>,
    JsonPath(username): JsonPath<String>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_store
        .find_one(UserFilter::Username(username))
        .await?;
    Ok((StatusCode::OK, Json(user_or_empty(user)?)))
}

// Missing users are reported as `{}`, not as an error
fn user_or_empty(user: Option<User>) -> Result<Value> {
    match user {
        Some(user) => serde_json::to_value(user).map_err(AppError::Json),
        None => Ok(json!({})),
    }
}
