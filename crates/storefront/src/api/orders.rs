//! Order endpoints for the customer identity space.

use serde::Serialize;
use tracing::instrument;

use maison_core::{Address, Order, PaymentMethod, ProductId};

use super::{ApiClient, ApiError};

/// One line of an order being placed.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemRequest {
    /// The product to order.
    pub product_id: ProductId,
    /// Quantity, at least 1.
    pub quantity: u32,
}

/// Payload for checkout. Totals are derived server-side, never trusted
/// from the client.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Lines to order.
    pub items: Vec<OrderItemRequest>,
    /// Shipping address, fully validated before this struct is built.
    pub address: Address,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
}

impl ApiClient {
    /// Fetch the signed-in customer's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/order/my-orders").await
    }

    /// Place an order. The backend derives totals and returns the created
    /// record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected by the backend.
    #[instrument(skip(self, request), fields(lines = request.items.len()))]
    pub async fn place_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        self.post_json("/order/create", request).await
    }
}
