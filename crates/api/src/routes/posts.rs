//! Post route handlers.
//!
//! Listing and creation are public (creation carries no auth in the
//! observed API); deletion requires a bearer token.

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde::Deserialize;

use cartwheel_core::PostId;

use crate::db::PostRepository;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::Post;
use crate::state::AppState;

/// Body for POST /posts.
#[derive(Debug, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// GET /posts
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostRepository::new(state.pool()).list().await?;
    Ok(Json(posts))
}

/// POST /posts
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid body".to_string()))?;

    let post = PostRepository::new(state.pool())
        .create(&req.title, &req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /posts/{id}
pub async fn remove(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    PostRepository::new(state.pool())
        .delete(PostId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
