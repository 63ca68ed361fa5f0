//! The catalog view pipeline.
//!
//! Every list screen in Maison (public all-products, admin product table,
//! admin order table) is the same shape: one full list fetch held in a
//! [`RecordStore`], a set of user-controlled predicates combined by AND,
//! a sort key, and optionally a pagination slicer. This module implements
//! that shape once, parametrized per screen.
//!
//! # Pipeline
//!
//! ```text
//! RecordStore --(FilterSet, AND)--> filtered --(SortKey, stable)--> sorted
//!     --(Paginator, optional)--> displayed
//! ```
//!
//! Recomputation is synchronous and atomic: a view is always derived from
//! exactly one filter configuration, never an interleaving of two. When the
//! store is in an error state the view is empty plus the error, never stale
//! data presented as success.

mod controller;
mod filter;
mod page;
mod sort;
mod store;

pub use controller::{CatalogView, ScreenController};
pub use filter::{Bounds, FilterSet, Predicate};
pub use page::{PageInfo, Paginator};
pub use sort::{SortKey, SortRecord};
pub use store::{Keyed, LoadOutcome, LoadToken, RecordStore};
