//! Handlers for user endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::users::{CreateUserRequest, UserResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::TrackerState;

/// Lists all users in insertion order.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<TrackerState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user from a username.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 Bad Request when the username is missing or empty.
pub async fn create_user_handler(
    State(state): State<TrackerState>,
    FormOrJson(payload): FormOrJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(&payload.username).await?;

    Ok(Json(user.into()))
}
