//! Comment repository for database operations.

use sqlx::SqlitePool;

use messenger_core::{CommentId, UserId};

use super::RepositoryError;
use crate::models::Comment;

/// Repository for comment database operations.
pub struct CommentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new comment and return the stored record.
    ///
    /// The `user_id` is stored as given; no check is made that it refers
    /// to an existing user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, comment: &str, user_id: UserId) -> Result<Comment, RepositoryError> {
        let comment = sqlx::query_as::<_, Comment>(
            r"
            INSERT INTO comments (comment, user_id)
            VALUES (?, ?)
            RETURNING id, comment, user_id
            ",
        )
        .bind(comment)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(comment)
    }

    /// List all comments for a user, in insertion order.
    ///
    /// Returns an empty list when the user has no comments. Whether the
    /// user itself exists is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, RepositoryError> {
        let comments = sqlx::query_as::<_, Comment>(
            r"
            SELECT id, comment, user_id
            FROM comments
            WHERE user_id = ?
            ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Overwrite a comment's text and return the updated record.
    ///
    /// Only the text changes; id and `user_id` are untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the comment doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_text(
        &self,
        id: CommentId,
        comment: &str,
    ) -> Result<Comment, RepositoryError> {
        let updated = sqlx::query_as::<_, Comment>(
            r"
            UPDATE comments
            SET comment = ?
            WHERE id = ?
            RETURNING id, comment, user_id
            ",
        )
        .bind(comment)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        updated.ok_or(RepositoryError::NotFound)
    }
}
