//! Payment repository.

use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::OrderId;

use super::error::{RepositoryError, ResultExt};
use crate::models::{NewPayment, Payment};

/// Repository for `payments`.
pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a payment against an order and return the stored row.
    ///
    /// Recording a payment does not change the order's status.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the order does not exist or the insert fails.
    #[instrument(skip(self, payment), fields(order_id = %payment.order_id, amount = %payment.amount))]
    pub async fn create(&self, payment: &NewPayment) -> Result<Payment, RepositoryError> {
        let created = sqlx::query_as::<_, Payment>(
            r"
            INSERT INTO payments (order_id, payment, date)
            VALUES ($1, $2, $3)
            RETURNING id, order_id, payment, date
            ",
        )
        .bind(payment.order_id)
        .bind(payment.amount)
        .bind(payment.date)
        .fetch_one(self.pool)
        .await
        .during("payments.create")?;

        debug!(id = %created.id, "Recorded payment");
        Ok(created)
    }

    /// List the payments recorded against an order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_by_order(&self, order_id: OrderId) -> Result<Vec<Payment>, RepositoryError> {
        sqlx::query_as::<_, Payment>(
            r"
            SELECT id, order_id, payment, date
            FROM payments
            WHERE order_id = $1
            ORDER BY id
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await
        .during("payments.list_by_order")
    }
}
