//! Maison Core - Shared types and catalog pipeline.
//!
//! This crate provides the common pieces used across all Maison components:
//! - `storefront` - Public-facing shopping client
//! - `admin` - Back-office management client
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain records, type-safe IDs, emails, and status machines
//! - [`catalog`] - The filter/sort/paginate view pipeline shared by every
//!   list screen

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
