//! Cart item repository.

use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::{ProductId, UserId};

use super::error::{RepositoryError, ResultExt};
use crate::models::CartItem;

/// Repository for `cart_items`.
pub struct CartItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartItemRepository<'a> {
    /// Create a new cart item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Put a product in a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the product is already in the cart; use
    /// [`Self::add_quantity`] to change the amount instead.
    /// Returns `Unknown` for other database errors, including an unknown
    /// user or product.
    #[instrument(skip(self, item), fields(user_id = %item.user_id, product_id = %item.product_id))]
    pub async fn create(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(item.user_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .execute(self.pool)
        .await
        .during("cart_items.create")?;

        Ok(())
    }

    /// List the contents of a user's cart, ordered by product ID.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        sqlx::query_as::<_, CartItem>(
            r"
            SELECT user_id, product_id, quantity
            FROM cart_items
            WHERE user_id = $1
            ORDER BY product_id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .during("cart_items.list_by_user")
    }

    /// Set the amount of a product in a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        const OP: &str = "cart_items.update_quantity";

        let result = sqlx::query(
            r"
            UPDATE cart_items
            SET quantity = $1
            WHERE user_id = $2 AND product_id = $3
            ",
        )
        .bind(quantity)
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await
        .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        Ok(())
    }

    /// Adjust the amount of a product in a user's cart by `delta`.
    ///
    /// Applied in a single statement; concurrent adjustments accumulate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the product is not in the cart.
    #[instrument(skip(self))]
    pub async fn add_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        delta: i32,
    ) -> Result<(), RepositoryError> {
        const OP: &str = "cart_items.add_quantity";

        let result = sqlx::query(
            r"
            UPDATE cart_items
            SET quantity = quantity + $1
            WHERE user_id = $2 AND product_id = $3
            ",
        )
        .bind(delta)
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await
        .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        Ok(())
    }

    /// Empty a user's cart.
    ///
    /// Returns the number of removed items. An already empty cart is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the statement fails.
    #[instrument(skip(self))]
    pub async fn clear_for_user(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await
            .during("cart_items.clear_for_user")?;

        let removed = result.rows_affected();
        debug!(removed, "Cleared cart");
        Ok(removed)
    }
}
