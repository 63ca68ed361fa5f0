//! Order record and line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::{OrderId, ProductId, UserId};
use super::status::{OrderStatus, PaymentMethod, PaymentStatus};

/// One product line within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// The ordered product.
    pub product_id: ProductId,
    /// Product name at order time (products may be renamed later).
    pub name: String,
    /// Unit price at order time.
    pub price: Decimal,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order placed by a customer.
///
/// Created by checkout; mutated only through status-update or delete calls.
/// The total is derived server-side: items subtotal plus shipping and tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// The owning customer.
    pub user_id: UserId,
    /// Customer display name, used by admin search.
    #[serde(default)]
    pub customer_name: String,
    /// Customer email, used by admin search.
    #[serde(default)]
    pub customer_email: String,
    /// Ordered line items.
    pub items: Vec<LineItem>,
    /// Shipping address. All fields required.
    pub address: Address,
    /// Shipping charge.
    pub shipping: Decimal,
    /// Tax charge.
    pub tax: Decimal,
    /// Grand total: items subtotal + shipping + tax.
    pub total: Decimal,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// How the order was paid.
    pub payment_method: PaymentMethod,
    /// Settlement state of the payment.
    pub payment_status: PaymentStatus,
    /// Gateway transaction reference. Present iff the order was paid online.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of `price * quantity` across line items.
    #[must_use]
    pub fn items_subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the stored total matches the derived total.
    ///
    /// The backend owns the derivation; this is a consistency check used
    /// when displaying fetched data.
    #[must_use]
    pub fn total_is_consistent(&self) -> bool {
        self.items_subtotal() + self.shipping + self.tax == self.total
    }

    /// Whether the transaction id is present exactly when it should be:
    /// online payment method and a settled payment.
    #[must_use]
    pub const fn transaction_id_is_consistent(&self) -> bool {
        match (self.payment_method, self.payment_status) {
            (PaymentMethod::Online, PaymentStatus::Paid) => self.transaction_id.is_some(),
            _ => self.transaction_id.is_none(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::new("o1"),
            user_id: UserId::new("u1"),
            customer_name: "Jane Doe".to_owned(),
            customer_email: "jane@example.com".to_owned(),
            items: vec![
                LineItem {
                    product_id: ProductId::new("p1"),
                    name: "Oak Side Table".to_owned(),
                    price: Decimal::from(120),
                    quantity: 1,
                },
                LineItem {
                    product_id: ProductId::new("p2"),
                    name: "Linen Throw".to_owned(),
                    price: Decimal::new(4250, 2),
                    quantity: 2,
                },
            ],
            address: Address {
                street: "12 Rue des Ateliers".to_owned(),
                city: "Lyon".to_owned(),
                state: "Rhone".to_owned(),
                postal_code: "69001".to_owned(),
            },
            shipping: Decimal::from(10),
            tax: Decimal::new(1025, 2),
            total: Decimal::new(22525, 2),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Online,
            payment_status: PaymentStatus::Paid,
            transaction_id: Some("txn_992".to_owned()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_items_subtotal() {
        // 120 + 2 * 42.50 = 205
        assert_eq!(order().items_subtotal(), Decimal::from(205));
    }

    #[test]
    fn test_total_consistency() {
        let mut o = order();
        assert!(o.total_is_consistent());
        o.total += Decimal::ONE;
        assert!(!o.total_is_consistent());
    }

    #[test]
    fn test_transaction_id_consistency() {
        let mut o = order();
        assert!(o.transaction_id_is_consistent());

        o.payment_method = PaymentMethod::CashOnDelivery;
        assert!(!o.transaction_id_is_consistent());

        o.transaction_id = None;
        assert!(o.transaction_id_is_consistent());
    }
}
