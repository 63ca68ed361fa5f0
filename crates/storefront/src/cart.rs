//! Client-side shopping cart and checkout.
//!
//! The cart is purely local until checkout: entries live in memory and are
//! destroyed when the order is placed. Checkout validates everything
//! locally first, so an empty cart or an incomplete address never reaches
//! the network.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use maison_core::{Address, AddressError, Order, PaymentMethod, Product, ProductId};

use crate::api::{ApiClient, ApiError, OrderItemRequest, OrderRequest};

/// Errors raised by cart operations and checkout.
#[derive(Debug, Error)]
pub enum CartError {
    /// Quantity must be at least 1 when adding.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Checkout requires at least one entry.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The shipping address has a blank field.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The backend rejected or failed the order call.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Variant attributes selected when adding a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantSelection {
    /// Selected color, if the product offers colors.
    pub color: Option<String>,
    /// Selected size, if the product offers sizes.
    pub size: Option<String>,
}

/// One line in the cart: a product reference, its variant, and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product.
    pub product_id: ProductId,
    /// Product name at add time, for display.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Decimal,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Selected variant attributes.
    pub variant: VariantSelection,
}

impl CartEntry {
    /// Price times quantity for this entry.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Current entries, in add order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total item count across entries.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of line totals. Shipping and tax are derived server-side at
    /// checkout.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Add a product. Adding the same product with the same variant merges
    /// into the existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is 0.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        variant: VariantSelection,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product_id == product.id && entry.variant == variant)
        {
            entry.quantity += quantity;
            return Ok(());
        }
        self.entries.push(CartEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            variant,
        });
        Ok(())
    }

    /// Set the quantity of an entry. A quantity of 0 removes the entry.
    /// Returns whether a matching entry existed.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        variant: &VariantSelection,
        quantity: u32,
    ) -> bool {
        if quantity == 0 {
            return self.remove(product_id, variant);
        }
        match self
            .entries
            .iter_mut()
            .find(|entry| &entry.product_id == product_id && &entry.variant == variant)
        {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove an entry. Returns whether it existed.
    pub fn remove(&mut self, product_id: &ProductId, variant: &VariantSelection) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(&entry.product_id == product_id && &entry.variant == variant));
        self.entries.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Place an order for the cart contents.
    ///
    /// Validation failures (empty cart, blank address field) are raised
    /// before any request is made. The cart is cleared only after the
    /// backend confirms the order.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or the API error if the call fails; the
    /// cart contents are left intact on any failure.
    #[instrument(skip_all, fields(lines = self.entries.len()))]
    pub async fn checkout(
        &mut self,
        api: &ApiClient,
        address: Address,
        payment_method: PaymentMethod,
    ) -> Result<Order, CartError> {
        if self.entries.is_empty() {
            return Err(CartError::EmptyCart);
        }
        address.validate()?;

        let request = OrderRequest {
            items: self
                .entries
                .iter()
                .map(|entry| OrderItemRequest {
                    product_id: entry.product_id.clone(),
                    quantity: entry.quantity,
                })
                .collect(),
            address,
            payment_method,
        };

        let order = api.place_order(&request).await?;
        self.clear();
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maison_core::ProductCategory;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::from(price),
            category: ProductCategory::Decor,
            images: Vec::new(),
            rating: None,
            stock: None,
            created_at: None,
        }
    }

    fn color(name: &str) -> VariantSelection {
        VariantSelection {
            color: Some(name.to_owned()),
            size: None,
        }
    }

    #[test]
    fn test_add_merges_same_product_and_variant() {
        let mut cart = Cart::new();
        let p = product("p1", 40);
        cart.add(&p, 1, color("sage")).unwrap();
        cart.add(&p, 2, color("sage")).unwrap();
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_different_variants_stay_separate() {
        let mut cart = Cart::new();
        let p = product("p1", 40);
        cart.add(&p, 1, color("sage")).unwrap();
        cart.add(&p, 1, color("rust")).unwrap();
        assert_eq!(cart.entries().len(), 2);
    }

    #[test]
    fn test_zero_quantity_add_is_rejected() {
        let mut cart = Cart::new();
        let p = product("p1", 40);
        assert!(matches!(
            cart.add(&p, 0, VariantSelection::default()),
            Err(CartError::ZeroQuantity)
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let p = product("p1", 40);
        cart.add(&p, 2, VariantSelection::default()).unwrap();
        assert!(cart.set_quantity(&p.id, &VariantSelection::default(), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 40), 2, VariantSelection::default())
            .unwrap();
        cart.add(&product("p2", 15), 1, VariantSelection::default())
            .unwrap();
        assert_eq!(cart.subtotal(), Decimal::from(95));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_never_hits_network() {
        let api = ApiClient::new(&crate::config::ApiConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 1,
        })
        .unwrap();
        let mut cart = Cart::new();
        let address = Address {
            street: "1 Main".into(),
            city: "Lyon".into(),
            state: "Rhone".into(),
            postal_code: "69001".into(),
        };
        let result = cart
            .checkout(&api, address, PaymentMethod::CashOnDelivery)
            .await;
        assert!(matches!(result, Err(CartError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_checkout_invalid_address_keeps_cart() {
        let api = ApiClient::new(&crate::config::ApiConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 1,
        })
        .unwrap();
        let mut cart = Cart::new();
        cart.add(&product("p1", 40), 1, VariantSelection::default())
            .unwrap();
        let address = Address {
            street: String::new(),
            city: "Lyon".into(),
            state: "Rhone".into(),
            postal_code: "69001".into(),
        };
        let result = cart
            .checkout(&api, address, PaymentMethod::CashOnDelivery)
            .await;
        assert!(matches!(result, Err(CartError::Address(_))));
        assert_eq!(cart.entries().len(), 1);
    }
}
