//! User domain type.

use serde::Serialize;

use messenger_core::UserId;

/// A messenger user.
///
/// The stored password never appears here; it is written at creation and
/// read by nothing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address. Not validated and not unique; duplicates are allowed.
    pub email: String,
}
