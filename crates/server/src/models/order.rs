//! Order and order line item records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shop_core::{OrderId, ProductId, UserId};

/// An order placed by a user.
///
/// `status` and `pickup_method` carry the raw column text. Valid values are
/// those of [`shop_core::OrderStatus`] and [`shop_core::PickupMethod`]; the
/// store rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    /// Order total.
    pub price: Decimal,
    pub status: String,
    pub pickup_method: String,
    /// Absent for in-store pickup.
    pub delivery_address: Option<String>,
}

/// Input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub price: Decimal,
    pub status: String,
    pub pickup_method: String,
    pub delivery_address: Option<String>,
}

/// One product line within an order.
///
/// Keyed by `(order_id, product_id)`. `product_price` is the unit price at
/// the time the order was placed, independent of later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub product_price: Decimal,
}
