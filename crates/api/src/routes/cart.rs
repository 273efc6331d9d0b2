//! Cart route handlers.
//!
//! All routes require a bearer token; every mutation is scoped to the
//! authenticated user's own cart. Items in other users' carts surface as
//! `404` rather than `403`, so their existence never leaks.

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde::Deserialize;

use cartwheel_core::{CartItemId, ProductId};

use crate::db::{CartRepository, RepositoryError};
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{Cart, CartItemSummary};
use crate::state::AppState;

/// Body for POST /cart/items. Missing fields decode as zero and are
/// validated or normalized below.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub product_id: i32,
    #[serde(default)]
    pub quantity: i32,
}

/// Body for PATCH /cart/items/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub quantity: i32,
}

/// An add with a non-positive quantity means "one", never an error.
const fn normalize_quantity(quantity: i32) -> i32 {
    if quantity <= 0 { 1 } else { quantity }
}

/// GET /cart
///
/// Resolves (or lazily creates) the user's cart and returns it with all
/// items joined against current product data. The item list is empty,
/// never absent, for a cart with no items.
pub async fn show(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Cart>, AppError> {
    let carts = CartRepository::new(state.pool());

    let cart_id = carts.get_or_create(user_id).await?;
    let items = carts.items(cart_id).await?;

    Ok(Json(Cart {
        id: cart_id,
        user_id,
        items,
    }))
}

/// POST /cart/items
pub async fn add_item(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CartItemSummary>), AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid body".to_string()))?;

    if req.product_id == 0 {
        return Err(AppError::BadRequest("invalid body".to_string()));
    }
    let quantity = normalize_quantity(req.quantity);

    let carts = CartRepository::new(state.pool());
    let cart_id = carts.get_or_create(user_id).await?;

    let item = carts
        .upsert_item(cart_id, ProductId::new(req.product_id), quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /cart/items/{id}
pub async fn update_item(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<CartItemSummary>, AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid quantity".to_string()))?;

    if req.quantity <= 0 {
        return Err(AppError::BadRequest("invalid quantity".to_string()));
    }

    let item = CartRepository::new(state.pool())
        .update_item_quantity(user_id, CartItemId::new(item_id), req.quantity)
        .await
        .map_err(not_found_item)?;

    Ok(Json(item))
}

/// DELETE /cart/items/{id}
pub async fn remove_item(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    CartRepository::new(state.pool())
        .remove_item(user_id, CartItemId::new(item_id))
        .await
        .map_err(not_found_item)?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cart
pub async fn clear(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    CartRepository::new(state.pool()).clear(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Map a missing/unowned item to a uniform 404.
fn not_found_item(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound("item not found".to_string()),
        other => AppError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(0), 1);
        assert_eq!(normalize_quantity(-5), 1);
        assert_eq!(normalize_quantity(1), 1);
        assert_eq!(normalize_quantity(42), 42);
    }

    #[test]
    fn test_add_item_request_defaults() {
        let req: AddItemRequest = serde_json::from_str("{}").expect("empty body decodes");
        assert_eq!(req.product_id, 0);
        assert_eq!(req.quantity, 0);
    }
}
