//! Order and order item repositories.

use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::{OrderId, OrderStatus, UserId};

use super::error::{ErrorKind, RepositoryError, ResultExt};
use crate::models::{NewOrder, Order, OrderItem};

/// Repository for `orders`.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatus` or `InvalidPickupMethod` when the store
    /// rejects the corresponding value.
    /// Returns `Unknown` for other database errors, including an unknown
    /// `user_id`.
    #[instrument(
        skip(self, order),
        fields(user_id = %order.user_id, status = %order.status, pickup_method = %order.pickup_method)
    )]
    pub async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let created = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, date, price, status, pickup_method, delivery_address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, date, price, status, pickup_method, delivery_address
            ",
        )
        .bind(order.user_id)
        .bind(order.date)
        .bind(order.price)
        .bind(&order.status)
        .bind(&order.pickup_method)
        .bind(order.delivery_address.as_deref())
        .fetch_one(self.pool)
        .await
        .during("orders.create")?;

        debug!(id = %created.id, "Created order");
        Ok(created)
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order has this ID.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        const OP: &str = "orders.get_by_id";

        sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, date, price, status, pickup_method, delivery_address
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .during(OP)?
        .ok_or_else(|| RepositoryError::not_found(OP))
    }

    /// List all of a user's orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, date, price, status, pickup_method, delivery_address
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .during("orders.list_by_user")
    }

    async fn list_by_user_with_status(
        &self,
        user_id: UserId,
        status: OrderStatus,
    ) -> Result<Vec<Order>, ErrorKind> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, date, price, status, pickup_method, delivery_address
            FROM orders
            WHERE user_id = $1 AND status = $2
            ORDER BY id
            ",
        )
        .bind(user_id)
        .bind(status.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// List a user's orders that are still awaiting payment.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_pending_by_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        self.list_by_user_with_status(user_id, OrderStatus::Pending)
            .await
            .during("orders.list_pending_by_user")
    }

    /// List a user's paid orders.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_paid_by_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        self.list_by_user_with_status(user_id, OrderStatus::Paid)
            .await
            .during("orders.list_paid_by_user")
    }

    /// List a user's canceled orders.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_canceled_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Order>, RepositoryError> {
        self.list_by_user_with_status(user_id, OrderStatus::Canceled)
            .await
            .during("orders.list_canceled_by_user")
    }

    /// Set an order's status.
    ///
    /// `status` is passed through to the store unchecked; use
    /// [`OrderStatus::as_str`] for the accepted literals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatus` if the store rejects `status`.
    /// Returns `NotFound` if no order has this ID.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: &str) -> Result<(), RepositoryError> {
        const OP: &str = "orders.update_status";

        let result = sqlx::query(
            r"
            UPDATE orders
            SET status = $1
            WHERE id = $2
            ",
        )
        .bind(status)
        .bind(id)
        .execute(self.pool)
        .await
        .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        Ok(())
    }
}

/// Repository for `order_items`.
pub struct OrderItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderItemRepository<'a> {
    /// Create a new order item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a line to an order.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the order already has a line for this
    /// product.
    /// Returns `Unknown` for other database errors, including an unknown
    /// order or product.
    #[instrument(skip(self, item), fields(order_id = %item.order_id, product_id = %item.product_id))]
    pub async fn create(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO order_items (order_id, product_id, quantity, product_price)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(item.order_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(item.product_price)
        .execute(self.pool)
        .await
        .during("order_items.create")?;

        Ok(())
    }

    /// List the lines of an order, ordered by product ID.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_by_order(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        sqlx::query_as::<_, OrderItem>(
            r"
            SELECT order_id, product_id, quantity, product_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY product_id
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await
        .during("order_items.list_by_order")
    }
}
