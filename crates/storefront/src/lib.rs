//! Maison Storefront - public shopping client.
//!
//! This crate is the customer-facing half of Maison: it talks to the remote
//! commerce REST API and drives the catalog pipeline for the all-products
//! screen.
//!
//! # Architecture
//!
//! - All durable state lives behind the REST API; this crate holds
//!   read-mostly cached copies for the duration of a screen visit
//! - Every mutation round-trips to the backend before the local copy is
//!   patched
//! - The wishlist is the one deliberate exception: purely local state,
//!   persisted as a JSON file, never synced to the server
//!
//! # Security
//!
//! This crate only ever carries a customer session token. The admin token
//! is a disjoint identity space and lives in `maison-admin`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod orders;
pub mod session;
pub mod wishlist;
