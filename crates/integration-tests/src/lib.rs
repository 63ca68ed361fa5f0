//! Shared fixture builders for the Maison integration tests.
//!
//! Tests drive the real screens with in-memory data through `ingest`;
//! nothing here talks to a live backend.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use secrecy::SecretString;

use maison_admin::api::AdminClient;
use maison_admin::config::AdminConfig;
use maison_core::{
    Address, LineItem, Order, OrderId, OrderStatus, PaymentMethod, PaymentStatus, Product,
    ProductCategory, ProductId, UserId,
};
use maison_storefront::api::ApiClient;
use maison_storefront::config::ApiConfig;

/// A storefront client pointed at a placeholder host. Tests seed screens
/// through `ingest`, so no request is ever sent.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn storefront_client() -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: "https://api.maison.invalid".parse().unwrap(),
        timeout_secs: 1,
    })
    .unwrap()
}

/// An admin client pointed at a placeholder host.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn admin_client() -> AdminClient {
    AdminClient::new(&AdminConfig {
        base_url: "https://api.maison.invalid".parse().unwrap(),
        timeout_secs: 1,
        admin_token: SecretString::from("test_admin_token"),
    })
    .unwrap()
}

/// A timestamp on the given April 2026 day, for date-range fixtures.
///
/// # Panics
///
/// Panics if the day is not a valid calendar day.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn april_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, day, 12, 0, 0).unwrap()
}

/// A catalog product with the fields the pipeline filters and sorts on.
#[must_use]
pub fn product(id: &str, name: &str, price: i64, category: ProductCategory) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: Decimal::from(price),
        category,
        images: Vec::new(),
        rating: None,
        stock: None,
        created_at: None,
    }
}

/// A numbered product for pagination fixtures: `item-07`, priced by index.
#[must_use]
pub fn numbered_product(index: usize) -> Product {
    product(
        &format!("item-{index:02}"),
        &format!("Item {index:02}"),
        i64::try_from(index).unwrap_or(i64::MAX),
        ProductCategory::Other,
    )
}

/// An order with a single line item and a consistent total.
#[must_use]
pub fn order(id: &str, status: OrderStatus, total: i64, day: u32) -> Order {
    Order {
        id: OrderId::new(id),
        user_id: UserId::new("u1"),
        customer_name: "Jane Doe".to_owned(),
        customer_email: "jane@example.com".to_owned(),
        items: vec![LineItem {
            product_id: ProductId::new("p1"),
            name: "Oak Side Table".to_owned(),
            price: Decimal::from(total),
            quantity: 1,
        }],
        address: address(),
        shipping: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::from(total),
        status,
        payment_method: PaymentMethod::CashOnDelivery,
        payment_status: PaymentStatus::Pending,
        transaction_id: None,
        created_at: april_day(day),
    }
}

/// A complete shipping address.
#[must_use]
pub fn address() -> Address {
    Address {
        street: "12 Rue des Ateliers".to_owned(),
        city: "Lyon".to_owned(),
        state: "Rhone".to_owned(),
        postal_code: "69001".to_owned(),
    }
}
