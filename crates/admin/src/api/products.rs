//! Product management endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use maison_core::{Product, ProductCategory, ProductId};

use super::{Acknowledgement, AdminClient, AdminError};

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRequest {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Catalog category.
    pub category: ProductCategory,
    /// Image URLs, first one featured.
    pub images: Vec<String>,
    /// Units in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl AdminClient {
    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn all_products(&self) -> Result<Vec<Product>, AdminError> {
        self.get_json("/products/all").await
    }

    /// Create a product. Returns the server's canonical record, ID
    /// included.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_product(&self, request: &ProductRequest) -> Result<Product, AdminError> {
        self.post_json("/products/create", request).await
    }

    /// Update a product. Returns the server's canonical record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        request: &ProductRequest,
    ) -> Result<Product, AdminError> {
        self.put_json(&format!("/products/update/{id}"), request)
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), AdminError> {
        let _: Acknowledgement = self.delete_json(&format!("/products/delete/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_stock() {
        let request = ProductRequest {
            name: "Oak Bench".to_owned(),
            description: String::new(),
            price: Decimal::from(150),
            category: ProductCategory::Furniture,
            images: Vec::new(),
            stock: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("stock").is_none());
    }
}
