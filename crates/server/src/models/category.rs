//! Product category records.

use serde::{Deserialize, Serialize};

use shop_core::CategoryId;

/// A product category. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// Input for creating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    /// A category with an empty description.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}
