//! End-to-end tests for the cart and checkout validation path.
//!
//! The API client points at a placeholder host; every assertion here is
//! about behavior that must resolve before the network is touched.

#![allow(clippy::unwrap_used)]

use maison_core::{Address, PaymentMethod, ProductCategory};
use maison_storefront::cart::{Cart, CartError, VariantSelection};

use maison_integration_tests::{address, product, storefront_client};

fn variant(color: &str) -> VariantSelection {
    VariantSelection {
        color: Some(color.to_owned()),
        size: None,
    }
}

#[test]
fn test_cart_builds_up_like_a_browsing_session() {
    let mut cart = Cart::new();
    let vase = product("p1", "Ceramic Vase", 50, ProductCategory::Decor);
    let bench = product("p2", "Oak Bench", 150, ProductCategory::Furniture);

    cart.add(&vase, 1, variant("sage")).unwrap();
    cart.add(&bench, 1, VariantSelection::default()).unwrap();
    cart.add(&vase, 2, variant("sage")).unwrap();
    cart.add(&vase, 1, variant("rust")).unwrap();

    // Same product+variant merged; distinct variant kept separate.
    assert_eq!(cart.entries().len(), 3);
    assert_eq!(cart.total_quantity(), 5);
    assert_eq!(cart.subtotal(), rust_decimal::Decimal::from(350));

    // Dropping a line by setting quantity to zero.
    assert!(cart.set_quantity(&vase.id, &variant("rust"), 0));
    assert_eq!(cart.entries().len(), 2);
}

#[tokio::test]
async fn test_empty_cart_checkout_fails_locally() {
    let api = storefront_client();
    let mut cart = Cart::new();

    let result = cart
        .checkout(&api, address(), PaymentMethod::CashOnDelivery)
        .await;
    assert!(matches!(result, Err(CartError::EmptyCart)));
}

#[tokio::test]
async fn test_incomplete_address_fails_locally_and_keeps_cart() {
    let api = storefront_client();
    let mut cart = Cart::new();
    cart.add(
        &product("p1", "Ceramic Vase", 50, ProductCategory::Decor),
        1,
        VariantSelection::default(),
    )
    .unwrap();

    let incomplete = Address {
        city: String::new(),
        ..address()
    };
    let result = cart
        .checkout(&api, incomplete, PaymentMethod::Online)
        .await;
    assert!(matches!(result, Err(CartError::Address(_))));

    // A failed checkout never drains the cart.
    assert_eq!(cart.entries().len(), 1);
    assert_eq!(cart.total_quantity(), 1);
}
