//! HTTP route handlers for the messenger service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (probes the database)
//!
//! # Users
//! POST   /users/               - Create a user
//! GET    /users/               - List all users
//! GET    /users/{id}           - Get one user (404 if absent)
//! DELETE /users/{id}           - Delete a user (404 if absent)
//! GET    /users/{id}/comments/ - List a user's comments (404 if user absent)
//!
//! # Comments
//! POST /comments/              - Create a comment (user existence unchecked)
//! PUT  /comments/{id}          - Overwrite comment text (`comment` query param)
//! ```

pub mod comments;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the user routes router.
///
/// Paths are registered literally, trailing slashes included, so the
/// collection endpoints answer at `/users/` exactly as documented.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(users::create).get(users::list))
        .route("/users/{id}", get(users::show).delete(users::delete))
        .route("/users/{id}/comments/", get(comments::list_by_user))
}

/// Create the comment routes router.
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/", post(comments::create))
        .route("/comments/{id}", put(comments::update))
}

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(comment_routes())
}
