//! Product browsing endpoints.

use std::sync::Arc;

use tracing::{debug, instrument};

use maison_core::{Product, ProductCategory};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch the full product list.
    ///
    /// The response is cached for 5 minutes; a screen refresh within that
    /// window is served locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.cached_product_list("products:all", "/products/all")
            .await
    }

    /// Fetch products of one category, filtered server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn products_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<Vec<Product>, ApiError> {
        let cache_key = format!("products:category:{category}");
        let path = format!("/products/category/{category}");
        self.cached_product_list(&cache_key, &path).await
    }

    /// Full-text product search, executed server-side.
    ///
    /// Not cached: queries are too varied for the cache to pay off.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("/products/search/{}", urlencoding::encode(query));
        self.get_json(&path).await
    }

    async fn cached_product_list(
        &self,
        cache_key: &str,
        path: &str,
    ) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.product_cache().get(cache_key).await {
            debug!(cache_key, "Cache hit for product list");
            return Ok((*products).clone());
        }

        let products: Vec<Product> = self.get_json(path).await?;
        self.product_cache()
            .insert(cache_key.to_owned(), Arc::new(products.clone()))
            .await;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_search_path_escapes_query() {
        let path = format!("/products/search/{}", urlencoding::encode("linen throw"));
        assert_eq!(path, "/products/search/linen%20throw");
    }
}
