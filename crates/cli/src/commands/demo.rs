//! Demo data walkthrough.
//!
//! Adds the `flowers`, `phone` and `aboba` categories, reads them back and
//! lists a sample product under the first one. Categories that already exist
//! are reused, so the command can be run repeatedly.

use rust_decimal::Decimal;
use tracing::info;

use shop_server::config::ShopConfig;
use shop_server::db::{ErrorKind, Repository, RepositoryError};
use shop_server::models::{NewCategory, NewProduct, ProductCategory};

const CATEGORIES: [&str; 3] = ["flowers", "phone", "aboba"];

/// Seed demo categories and a product, logging what the store returns.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or any store operation
/// fails for a reason other than a category already existing.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::load()?;
    let repo = Repository::connect(&config.database).await?;

    for name in CATEGORIES {
        match repo.categories().create(&NewCategory::named(name)).await {
            Ok(category) => info!(id = %category.id, name, "Added category"),
            Err(e) if matches!(e.kind(), ErrorKind::AlreadyExists) => {
                info!(name, "Category already present");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let categories = repo.categories().list_all().await?;
    info!(count = categories.len(), "Categories: {categories:?}");

    let flowers = find_category(&categories, CATEGORIES[0])?;
    let fetched = repo.categories().get_by_id(flowers.id).await?;
    info!("Fetched category: {fetched:?}");

    let product = repo
        .products()
        .create(&NewProduct {
            name: "aboba".to_string(),
            description: "a".to_string(),
            price: Decimal::new(15645, 2),
            quantity: 256,
            category_id: fetched.id,
            image_path: "aboba.txt".to_string(),
        })
        .await?;
    info!(id = %product.id, price = %product.price, "Added product");

    repo.close().await;
    Ok(())
}

fn find_category<'a>(
    categories: &'a [ProductCategory],
    name: &str,
) -> Result<&'a ProductCategory, RepositoryError> {
    categories
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| RepositoryError::not_found("demo.find_category"))
}
