//! Blog post domain type.

use serde::Serialize;
use sqlx::FromRow;

use cartwheel_core::PostId;

/// A blog-style post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}
