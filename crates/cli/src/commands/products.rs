//! Catalog browsing commands.
//!
//! # Environment Variables
//!
//! - `MAISON_API_BASE_URL` - Base URL of the commerce REST API

use thiserror::Error;

use maison_storefront::api::{ApiClient, ApiError};
use maison_storefront::catalog::CatalogScreen;
use maison_storefront::config::{ConfigError, StorefrontConfig};

use maison_core::Product;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum ProductsError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The catalog fetch failed; the message comes from the screen state.
    #[error("Catalog load failed: {0}")]
    Load(String),
}

/// List the catalog with client-side filters and sort.
pub async fn list(
    query: &str,
    category: &str,
    min_price: &str,
    max_price: &str,
    sort: &str,
) -> Result<(), ProductsError> {
    let config = StorefrontConfig::from_env()?;
    let api = ApiClient::new(&config.api)?;

    let mut screen = CatalogScreen::new(api);
    screen.load().await;

    screen.set_query(query);
    screen.set_category_param(category);
    screen.set_price_bounds(min_price, max_price);
    screen.set_sort_param(sort);

    let view = screen.view();
    if let Some(message) = view.error {
        return Err(ProductsError::Load(message));
    }

    tracing::info!("{} product(s)", view.items.len());
    for product in &view.items {
        print_product(product);
    }
    Ok(())
}

/// Server-side product search.
pub async fn search(query: &str) -> Result<(), ProductsError> {
    let config = StorefrontConfig::from_env()?;
    let api = ApiClient::new(&config.api)?;

    let products = api.search_products(query).await?;
    tracing::info!("{} product(s) matching {query:?}", products.len());
    for product in &products {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    tracing::info!(
        "  {}  {}  {}  {}",
        product.id,
        product.name,
        product.price,
        product.category
    );
}
