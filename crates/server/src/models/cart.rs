//! Shopping cart records.

use serde::{Deserialize, Serialize};

use shop_core::{ProductId, UserId};

/// A product in a user's cart, keyed by `(user_id, product_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}
