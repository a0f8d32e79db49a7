//! Read-only catalog API.

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use shop_core::{CategoryId, ProductId};

use crate::error::Result;
use crate::models::{Product, ProductCategory};
use crate::state::AppState;

/// List every category.
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<ProductCategory>>> {
    let categories = state.repository().categories().list_all().await?;
    Ok(Json(categories))
}

/// Show one category.
#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<ProductCategory>> {
    let category = state.repository().categories().get_by_id(id).await?;
    Ok(Json(category))
}

/// List the products in a category. Unknown categories yield 404.
#[instrument(skip(state))]
pub async fn list_category_products(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Vec<Product>>> {
    let repo = state.repository();
    repo.categories().get_by_id(id).await?;
    let products = repo.products().list_by_category(id).await?;
    Ok(Json(products))
}

/// Show one product.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = state.repository().products().get_by_id(id).await?;
    Ok(Json(product))
}
