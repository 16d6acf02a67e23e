//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use messenger_core::UserId;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::state::AppState;

/// Request to create a user.
///
/// No validation beyond deserialization: the email is not checked for
/// format and the password has no policy applied.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from deleting a user.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

/// Create a new user.
///
/// POST /users/
///
/// Returns the stored record including its assigned id. The password is
/// persisted but never serialized back.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>> {
    let users = UserRepository::new(state.pool());
    let user = users.create(&req.name, &req.email, &req.password).await?;

    Ok(Json(user))
}

/// List all users, unfiltered and unpaginated.
///
/// GET /users/
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool());

    Ok(Json(users.list().await?))
}

/// Get one user by id.
///
/// GET /users/{id}
///
/// # Errors
///
/// Returns 404 if no user has the given id.
pub async fn show(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<User>> {
    let users = UserRepository::new(state.pool());
    let user = users
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user by id.
///
/// DELETE /users/{id}
///
/// The user's comments are neither removed nor checked; they keep their
/// (now dangling) `user_id`.
///
/// # Errors
///
/// Returns 404 if no user has the given id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<DeleteUserResponse>> {
    let users = UserRepository::new(state.pool());

    if !users.delete(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
    }))
}
