//! Product repository.
//!
//! Single-column updates all go through one internal helper that takes the
//! column from a closed set of product fields. Only those vetted identifiers
//! are interpolated into statement text; values are always bound as
//! parameters.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_core::{CategoryId, ProductId};

use super::error::{ErrorKind, RepositoryError, ResultExt};
use crate::models::{NewProduct, Product};

/// A writable product column paired with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProductField {
    Name(String),
    Description(String),
    Price(Decimal),
    Quantity(i32),
    Category(CategoryId),
    ImagePath(String),
}

impl ProductField {
    const fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Price(_) => "price",
            Self::Quantity(_) => "quantity",
            Self::Category(_) => "category_id",
            Self::ImagePath(_) => "image_path",
        }
    }
}

/// Repository for `products`.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `NoCategory` if `category_id` does not reference a category.
    /// Returns `Unknown` for any other database error.
    #[instrument(skip(self, product), fields(name = %product.name, category_id = %product.category_id))]
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let created = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, description, price, quantity, category_id, image_path)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, price, quantity, category_id, image_path
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.category_id)
        .bind(&product.image_path)
        .fetch_one(self.pool)
        .await
        .during("products.create")?;

        debug!(id = %created.id, "Created product");
        Ok(created)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    /// Returns `Unknown` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        const OP: &str = "products.get_by_id";

        sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, quantity, category_id, image_path
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .during(OP)?
        .ok_or_else(|| RepositoryError::not_found(OP))
    }

    /// List every product, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, quantity, category_id, image_path
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await
        .during("products.list_all")
    }

    /// List the products in one category, ordered by ID.
    ///
    /// An unknown category yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the query fails.
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, price, quantity, category_id, image_path
            FROM products
            WHERE category_id = $1
            ORDER BY id
            ",
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await
        .during("products.list_by_category")
    }

    /// Rewrite exactly one column of one product.
    async fn update_field(&self, id: ProductId, field: ProductField) -> Result<(), ErrorKind> {
        let sql = format!("UPDATE products SET {} = $1 WHERE id = $2", field.column());

        let query = sqlx::query(&sql);
        let query = match field {
            ProductField::Name(value)
            | ProductField::Description(value)
            | ProductField::ImagePath(value) => query.bind(value),
            ProductField::Price(value) => query.bind(value),
            ProductField::Quantity(value) => query.bind(value),
            ProductField::Category(value) => query.bind(value),
        };

        let result = query.bind(id).execute(self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(ErrorKind::NotFound);
        }

        Ok(())
    }

    /// Rename a product.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self, name))]
    pub async fn update_name(&self, id: ProductId, name: &str) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::Name(name.to_owned()))
            .await
            .during("products.update_name")
    }

    /// Replace a product's description.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self, description))]
    pub async fn update_description(
        &self,
        id: ProductId,
        description: &str,
    ) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::Description(description.to_owned()))
            .await
            .during("products.update_description")
    }

    /// Set a product's unit price.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn update_price(&self, id: ProductId, price: Decimal) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::Price(price))
            .await
            .during("products.update_price")
    }

    /// Set a product's stock to an absolute quantity.
    ///
    /// Use [`Self::add_quantity`] to adjust stock relative to its current
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ProductId, quantity: i32) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::Quantity(quantity))
            .await
            .during("products.update_quantity")
    }

    /// Point a product at its image.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn update_image_path(
        &self,
        id: ProductId,
        image_path: &str,
    ) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::ImagePath(image_path.to_owned()))
            .await
            .during("products.update_image_path")
    }

    /// Move a product to another category.
    ///
    /// # Errors
    ///
    /// Returns `NoCategory` if `category_id` does not reference a category.
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: ProductId,
        category_id: CategoryId,
    ) -> Result<(), RepositoryError> {
        self.update_field(id, ProductField::Category(category_id))
            .await
            .during("products.update_category")
    }

    /// Adjust stock by `delta` (which may be negative).
    ///
    /// This is a single `quantity = quantity + $1` statement, so concurrent
    /// adjustments to the same product never lose an update.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn add_quantity(&self, id: ProductId, delta: i32) -> Result<(), RepositoryError> {
        const OP: &str = "products.add_quantity";

        let result = sqlx::query(
            r"
            UPDATE products
            SET quantity = quantity + $1
            WHERE id = $2
            ",
        )
        .bind(delta)
        .bind(id)
        .execute(self.pool)
        .await
        .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        Ok(())
    }

    /// Delete a product.
    ///
    /// # Returns
    ///
    /// Returns `true` once the row has been removed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    /// Returns `Unknown` if the product is still referenced by an order item.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        const OP: &str = "products.delete_by_id";

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .during(OP)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(OP));
        }

        debug!(%id, "Deleted product");
        Ok(true)
    }
}
