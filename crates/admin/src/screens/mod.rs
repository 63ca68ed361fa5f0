//! Management table screens.
//!
//! Each screen pairs the admin API client with a
//! [`ScreenController`](maison_core::catalog::ScreenController): data is
//! fetched whole, then filtered, sorted, and paginated client-side so the
//! table reacts to every control change without a round trip. Mutations
//! round-trip through the API first and patch the local store only on
//! success.

mod orders;
mod products;
mod users;

pub use orders::{OrderFilters, OrdersScreen, SearchField, StatusSelection};
pub use products::{CategorySelection, ProductFilters, ProductTableScreen};
pub use users::{UserFilters, UsersScreen};
