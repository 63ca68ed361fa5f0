//! The public all-products screen.
//!
//! One full fetch into the Record Store, then client-side filtering by
//! text, category, and price bounds, plus a sort key, all through the
//! shared catalog pipeline.

use rust_decimal::Decimal;
use tracing::instrument;

use maison_core::catalog::{Bounds, CatalogView, FilterSet, LoadOutcome, ScreenController, SortKey};
use maison_core::{Product, ProductCategory};

use crate::api::ApiClient;

/// Category dropdown state.
///
/// The dropdown carries raw strings; `All` is the sentinel that always
/// passes, and anything unrecognized degrades to "no match" instead of
/// crashing the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// The "all" sentinel: no constraint.
    #[default]
    All,
    /// Only products of one category.
    Only(ProductCategory),
    /// An unrecognized value: matches nothing.
    Unrecognized,
}

impl CategorySelection {
    /// Interpret a raw dropdown value.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        trimmed
            .parse::<ProductCategory>()
            .map_or(Self::Unrecognized, Self::Only)
    }
}

/// Filter configuration for the catalog screen.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilters {
    /// Free-text query, matched against name and description.
    pub query: String,
    /// Category dropdown state.
    pub category: CategorySelection,
    /// Inclusive price bounds.
    pub price: Bounds<Decimal>,
}

fn build_filters(filters: &CatalogFilters) -> FilterSet<Product> {
    let set = FilterSet::new()
        .text(
            &filters.query,
            vec![
                |p: &Product| p.name.as_str(),
                |p: &Product| p.description.as_str(),
            ],
        )
        .range(filters.price, |p: &Product| p.price);

    match filters.category {
        CategorySelection::All => set,
        CategorySelection::Only(category) => set.select(Some(category), |p: &Product| p.category),
        CategorySelection::Unrecognized => set.never(),
    }
}

/// Controller for the public all-products screen.
pub struct CatalogScreen {
    api: ApiClient,
    controller: ScreenController<Product, CatalogFilters>,
}

impl CatalogScreen {
    /// A screen with an empty store; call [`load`](Self::load) to populate.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: ScreenController::new(
                build_filters,
                CatalogFilters::default(),
                SortKey::Featured,
            ),
        }
    }

    /// Fetch the full product list into the Record Store.
    ///
    /// The fetch is generation-tagged: if a newer load starts while this
    /// one is in flight, the slower response is discarded rather than
    /// overwriting fresher data. A failed fetch records the error and
    /// leaves the previous records untouched.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.controller.begin_load();
        let result = self
            .api
            .all_products()
            .await
            .map_err(|e| e.to_string());
        self.controller.complete_load(token, result)
    }

    /// Seed the store with records fetched elsewhere.
    pub fn ingest(&mut self, products: Vec<Product>) {
        self.controller.ingest(products);
    }

    /// Update the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let mut filters = self.controller.filters().clone();
        filters.query = query.into();
        self.controller.set_filters(filters);
    }

    /// Update the category dropdown from its raw value.
    pub fn set_category_param(&mut self, raw: &str) {
        let mut filters = self.controller.filters().clone();
        filters.category = CategorySelection::from_param(raw);
        self.controller.set_filters(filters);
    }

    /// Update the price bounds from raw min/max fields. Malformed input
    /// coerces to "no constraint" on that side.
    pub fn set_price_bounds(&mut self, min: &str, max: &str) {
        let mut filters = self.controller.filters().clone();
        filters.price = Bounds::parse(min, max);
        self.controller.set_filters(filters);
    }

    /// Update the sort key from its query-parameter form.
    pub fn set_sort_param(&mut self, raw: &str) {
        self.controller.set_sort(SortKey::from_param(raw));
    }

    /// The displayed sequence for the current configuration.
    #[must_use]
    pub fn view(&self) -> CatalogView<Product> {
        self.controller.view()
    }
}
