//! Product domain type.

use serde::Serialize;
use sqlx::FromRow;

use cartwheel_core::ProductId;

/// A product in the catalog.
///
/// Read-only from the cart's perspective: cart items join against these
/// rows for display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Image URLs.
    pub images: Vec<String>,
    /// Discount applied to the price.
    pub discount: f64,
}
