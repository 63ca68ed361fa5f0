//! Dashboard aggregates.
//!
//! The dashboard is pure derivation: every number is computed client-side
//! from the fetched order and product lists, nothing is fetched separately.

use rust_decimal::Decimal;

use maison_core::{Order, OrderStatus, PaymentStatus, Product};

/// How few units of stock flags a product on the dashboard.
const LOW_STOCK_THRESHOLD: u32 = 5;

/// Aggregates shown on the admin landing screen.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    /// Total orders, any status.
    pub total_orders: usize,
    /// Total catalog products.
    pub total_products: usize,
    /// Revenue recognized from delivered, paid orders.
    pub revenue: Decimal,
    /// Order counts per status, in lifecycle order.
    pub status_counts: Vec<(OrderStatus, usize)>,
    /// Products at or below the low-stock threshold, tracked stock only.
    pub low_stock: Vec<Product>,
}

impl DashboardMetrics {
    /// Derive the dashboard from fetched data.
    #[must_use]
    pub fn compute(orders: &[Order], products: &[Product]) -> Self {
        let revenue = orders
            .iter()
            .filter(|o| {
                o.status == OrderStatus::Delivered && o.payment_status == PaymentStatus::Paid
            })
            .map(|o| o.total)
            .sum();

        let status_counts = OrderStatus::ALL
            .into_iter()
            .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
            .collect();

        let low_stock = products
            .iter()
            .filter(|p| p.stock.is_some_and(|units| units <= LOW_STOCK_THRESHOLD))
            .cloned()
            .collect();

        Self {
            total_orders: orders.len(),
            total_products: products.len(),
            revenue,
            status_counts,
            low_stock,
        }
    }

    /// Count for one status.
    #[must_use]
    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.status_counts
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, count)| *count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maison_core::{
        Address, LineItem, OrderId, PaymentMethod, ProductCategory, ProductId, UserId,
    };

    fn order(id: &str, status: OrderStatus, payment: PaymentStatus, total: i64) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("u1"),
            customer_name: String::new(),
            customer_email: String::new(),
            items: vec![LineItem {
                product_id: ProductId::new("p1"),
                name: "Oak Side Table".to_owned(),
                price: Decimal::from(total),
                quantity: 1,
            }],
            address: Address {
                street: "12 Rue des Ateliers".to_owned(),
                city: "Lyon".to_owned(),
                state: "Rhone".to_owned(),
                postal_code: "69001".to_owned(),
            },
            shipping: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::from(total),
            status,
            payment_method: PaymentMethod::Online,
            payment_status: payment,
            transaction_id: (payment == PaymentStatus::Paid).then(|| "txn_1".to_owned()),
            created_at: Utc::now(),
        }
    }

    fn product(id: &str, stock: Option<u32>) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Ceramic Vase".to_owned(),
            description: String::new(),
            price: Decimal::from(50),
            category: ProductCategory::Decor,
            images: Vec::new(),
            rating: None,
            stock,
            created_at: None,
        }
    }

    #[test]
    fn test_revenue_counts_only_delivered_and_paid() {
        let orders = vec![
            order("o1", OrderStatus::Delivered, PaymentStatus::Paid, 100),
            order("o2", OrderStatus::Delivered, PaymentStatus::Pending, 40),
            order("o3", OrderStatus::Shipped, PaymentStatus::Paid, 25),
        ];
        let metrics = DashboardMetrics::compute(&orders, &[]);
        assert_eq!(metrics.revenue, Decimal::from(100));
        assert_eq!(metrics.total_orders, 3);
    }

    #[test]
    fn test_status_counts_cover_every_status() {
        let orders = vec![
            order("o1", OrderStatus::Pending, PaymentStatus::Pending, 10),
            order("o2", OrderStatus::Pending, PaymentStatus::Pending, 10),
            order("o3", OrderStatus::Cancelled, PaymentStatus::Failed, 10),
        ];
        let metrics = DashboardMetrics::compute(&orders, &[]);
        assert_eq!(metrics.count_for(OrderStatus::Pending), 2);
        assert_eq!(metrics.count_for(OrderStatus::Cancelled), 1);
        assert_eq!(metrics.count_for(OrderStatus::Shipped), 0);
        assert_eq!(metrics.status_counts.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_low_stock_ignores_untracked_products() {
        let products = vec![
            product("p1", Some(3)),
            product("p2", Some(20)),
            product("p3", None),
        ];
        let metrics = DashboardMetrics::compute(&[], &products);
        let flagged: Vec<_> = metrics.low_stock.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(flagged, vec!["p1"]);
    }
}
