//! Comment domain type.

use serde::Serialize;

use messenger_core::{CommentId, UserId};

/// A comment authored by (referencing) a user.
///
/// The user reference is not enforced against the `users` table: a comment
/// may point at an id that was never created or has since been deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID, assigned by the store.
    pub id: CommentId,
    /// The comment text.
    pub comment: String,
    /// The authoring user's id.
    pub user_id: UserId,
}
