//! Database operations for the Cartwheel `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `users` - Registered accounts (email unique, password hash)
//! - `carts` - One cart per user (`user_id` unique)
//! - `cart_items` - Cart lines, unique on `(cart_id, product_id)`
//! - `products` - Catalog entries joined into cart item views
//! - `posts` - Blog-style posts
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and applied out of
//! band (`sqlx migrate run`), never on startup.

pub mod carts;
pub mod posts;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use carts::CartRepository;
pub use posts::PostRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
