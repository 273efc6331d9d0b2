//! Cart domain types.

use serde::Serialize;
use sqlx::FromRow;

use cartwheel_core::{CartId, CartItemId, ProductId, UserId};

/// A user's shopping cart with its items.
///
/// At most one cart exists per user; it is created lazily on first access
/// and survives being emptied.
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    /// Unique cart ID.
    pub id: CartId,
    /// Owning user.
    pub user_id: UserId,
    /// Items in insertion order. Always present, empty when the cart holds
    /// nothing.
    pub items: Vec<CartItem>,
}

/// The mutated row returned by item upserts and quantity updates.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItemSummary {
    /// Unique item ID.
    pub id: CartItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Quantity after the mutation.
    pub quantity: i32,
}

/// A cart line joined with current product display data.
///
/// `(cart_id, product_id)` is unique: re-adding a product increments the
/// quantity of the existing row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
    /// Unique item ID.
    pub id: CartItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Quantity, always positive.
    pub quantity: i32,
    /// Denormalized product name.
    pub name: String,
    /// Denormalized product price.
    pub price: f64,
    /// Denormalized product image URLs.
    pub images: Vec<String>,
    /// Denormalized product discount.
    pub discount: f64,
}
