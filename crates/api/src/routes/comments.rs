//! Comment route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use messenger_core::{CommentId, UserId};

use crate::db::{CommentRepository, RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::state::AppState;

/// Request to create a comment.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: String,
    pub user_id: UserId,
}

/// Query parameters for updating a comment.
///
/// The replacement text travels as a query parameter, not a body.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentParams {
    pub comment: String,
}

/// Create a new comment.
///
/// POST /comments/
///
/// Persists unconditionally: the given `user_id` is not checked against
/// the `users` table.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<Comment>> {
    let comments = CommentRepository::new(state.pool());
    let comment = comments.create(&req.comment, req.user_id).await?;

    Ok(Json(comment))
}

/// List a user's comments, in insertion order.
///
/// GET /users/{id}/comments/
///
/// An existing user with no comments yields an empty list.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<Comment>>> {
    let users = UserRepository::new(state.pool());
    if users.get_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let comments = CommentRepository::new(state.pool());

    Ok(Json(comments.list_by_user(user_id).await?))
}

/// Overwrite a comment's text.
///
/// PUT /comments/{id}?comment=...
///
/// Only the text changes; id and `user_id` stay as they were. Returns the
/// updated record.
///
/// # Errors
///
/// Returns 404 if no comment has the given id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CommentId>,
    Query(params): Query<UpdateCommentParams>,
) -> Result<Json<Comment>> {
    let comments = CommentRepository::new(state.pool());
    let comment = comments
        .update_text(id, &params.comment)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Comment not found".to_string()),
            other => AppError::Database(other),
        })?;

    Ok(Json(comment))
}
