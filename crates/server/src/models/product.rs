//! Product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shop_core::{CategoryId, ProductId};

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Generated product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: i32,
    /// Category the product is listed under.
    pub category_id: CategoryId,
    /// Path of the product image relative to the media root.
    pub image_path: String,
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category_id: CategoryId,
    pub image_path: String,
}
