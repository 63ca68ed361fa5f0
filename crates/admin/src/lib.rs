//! # maison-admin
//!
//! Back-office client for the Maison commerce API.
//!
//! This crate is the management counterpart of `maison-storefront`: it
//! talks to the same REST backend but in the admin identity space, which
//! is disjoint from the customer one. Construction requires an admin
//! bearer token; there is no unauthenticated admin client.
//!
//! On top of the API client sit the management screens, built on the
//! shared catalog pipeline from `maison-core`:
//!
//! - [`screens::OrdersScreen`] - paginated order table with status, date
//!   range, and field-targeted search filters
//! - [`screens::ProductTableScreen`] - product table with text and
//!   category filters
//! - [`dashboard::DashboardMetrics`] - aggregates derived client-side
//!   from fetched orders and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod screens;
