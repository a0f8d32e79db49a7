//! Product category repository.

use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::CategoryId;

use super::error::{RepositoryError, ResultExt};
use crate::models::{NewCategory, ProductCategory};

/// Repository for `product_categories`.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a category and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a category with the same name exists.
    /// Returns `Unknown` for any other database error.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create(&self, category: &NewCategory) -> Result<ProductCategory, RepositoryError> {
        let created = sqlx::query_as::<_, ProductCategory>(
            r"
            INSERT INTO product_categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            ",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(self.pool)
        .await
        .during("categories.create")?;

        debug!(id = %created.id, "Created product category");
        Ok(created)
    }

    /// List every category, ordered by ID. Empty when there are none.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<ProductCategory>, RepositoryError> {
        sqlx::query_as::<_, ProductCategory>(
            r"
            SELECT id, name, description
            FROM product_categories
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await
        .during("categories.list_all")
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no category has this ID.
    /// Returns `Unknown` if the query fails.
    pub async fn get_by_id(&self, id: CategoryId) -> Result<ProductCategory, RepositoryError> {
        const OP: &str = "categories.get_by_id";

        sqlx::query_as::<_, ProductCategory>(
            r"
            SELECT id, name, description
            FROM product_categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .during(OP)?
        .ok_or_else(|| RepositoryError::not_found(OP))
    }
}
