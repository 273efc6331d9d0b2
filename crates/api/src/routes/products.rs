//! Product route handlers.
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

use cartwheel_core::ProductId;

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::Product;
use crate::state::AppState;

/// Body for POST /products.
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub discount: f64,
}

/// GET /products
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid body".to_string()))?;

    let product = ProductRepository::new(state.pool())
        .create(
            &req.name,
            &req.description,
            req.price,
            &req.images,
            req.discount,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /products/{id}
pub async fn remove(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
