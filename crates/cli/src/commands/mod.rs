//! CLI command implementations.

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod wishlist;
