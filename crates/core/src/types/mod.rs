//! Core types for Maison.
//!
//! This module provides type-safe wrappers and domain records shared by the
//! storefront and admin clients.

pub mod address;
pub mod category;
pub mod email;
pub mod id;
pub mod order;
pub mod product;
pub mod status;
pub mod user;

pub use address::{Address, AddressError};
pub use category::{CategoryParseError, ProductCategory};
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{LineItem, Order};
pub use product::Product;
pub use status::{OrderStatus, PaymentMethod, PaymentStatus, TransitionError};
pub use user::User;
