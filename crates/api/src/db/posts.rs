//! Post repository for database operations.

use sqlx::PgPool;

use cartwheel_core::PostId;

use super::RepositoryError;
use crate::models::Post;

/// Repository for post database operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>(
            r"
            SELECT id, title, body
            FROM posts
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Create a new post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, title: &str, body: &str) -> Result<Post, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r"
            INSERT INTO posts (title, body)
            VALUES ($1, $2)
            RETURNING id, title, body
            ",
        )
        .bind(title)
        .bind(body)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post by ID. Deleting a missing post is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: PostId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
