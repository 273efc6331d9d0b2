//! Cart repository: per-user cart identity and item mutations.
//!
//! Every mutation is scoped to the owning user by joining through `carts`,
//! so an item in another user's cart is simply never matched. Aggregation
//! of duplicate adds happens inside a single `INSERT ... ON CONFLICT`
//! statement so concurrent adds of the same product converge on one summed
//! row.

use sqlx::PgPool;

use cartwheel_core::{CartId, CartItemId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{CartItem, CartItemSummary};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the user's cart ID, creating the cart if it does not exist.
    ///
    /// The upsert is atomic: concurrent first-time accesses for the same
    /// user resolve to the same row via the unique constraint on
    /// `user_id`. The no-op `DO UPDATE` makes `RETURNING` yield the
    /// existing ID instead of skipping the row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_or_create(&self, user_id: UserId) -> Result<CartId, RepositoryError> {
        let cart_id = sqlx::query_scalar::<_, CartId>(
            r"
            INSERT INTO carts (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id
            ",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(cart_id)
    }

    /// Load all items of a cart joined with current product display data,
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, cart_id: CartId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT ci.id, ci.product_id, ci.quantity,
                   p.name, p.price, p.images, p.discount
            FROM cart_items ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.cart_id = $1
            ORDER BY ci.id ASC
            ",
        )
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Insert a product into a cart, or add to the quantity of the
    /// existing row for the same product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails (e.g. the
    /// product does not exist).
    pub async fn upsert_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItemSummary, RepositoryError> {
        let item = sqlx::query_as::<_, CartItemSummary>(
            r"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            RETURNING id, product_id, quantity
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Set the quantity of an item in the user's own cart.
    ///
    /// Items in other users' carts are never matched, so an unowned item
    /// is indistinguishable from a missing one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no owned item matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_item_quantity(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        quantity: i32,
    ) -> Result<CartItemSummary, RepositoryError> {
        sqlx::query_as::<_, CartItemSummary>(
            r"
            UPDATE cart_items ci
            SET quantity = $1
            FROM carts c
            WHERE ci.id = $2
              AND ci.cart_id = c.id
              AND c.user_id = $3
            RETURNING ci.id, ci.product_id, ci.quantity
            ",
        )
        .bind(quantity)
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete an item from the user's own cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no owned item matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove_item(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items ci
            USING carts c
            WHERE ci.id = $1
              AND ci.cart_id = c.id
              AND c.user_id = $2
            ",
        )
        .bind(item_id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete all items in the user's cart. The cart row itself persists.
    ///
    /// Succeeds (and does nothing) when the cart is already empty or was
    /// never created.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM cart_items ci
            USING carts c
            WHERE ci.cart_id = c.id AND c.user_id = $1
            ",
        )
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
