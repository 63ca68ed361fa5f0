//! Product record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::ProductCategory;
use super::id::ProductId;

/// A product in the store.
///
/// Owned by the backend; clients hold a read-mostly cached copy for the
/// duration of a screen visit. Mutations round-trip through the API before
/// the local copy is patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Price in the store currency. Non-negative.
    pub price: Decimal,
    /// Product category.
    pub category: ProductCategory,
    /// Ordered image URLs; the first is the featured image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Average review rating on a 0-5 scale, if any reviews exist.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Units in stock, if inventory tracking is enabled.
    #[serde(default)]
    pub stock: Option<u32>,
    /// Creation timestamp, if the backend reports one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// The featured image URL, if the product has any images.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether any stock is available. Unknown stock counts as available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        match self.stock {
            Some(count) => count > 0,
            None => true,
        }
    }
}
