//! Domain types returned by the repositories and serialized in responses.

pub mod comment;
pub mod user;

pub use comment::Comment;
pub use user::User;
