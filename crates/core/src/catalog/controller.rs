//! Screen controller: the single recomputation entry point.
//!
//! A [`ScreenController`] owns the Record Store, the current filter
//! configuration, the sort key, and (optionally) the pagination slicer for
//! one list screen. Every view it hands out is derived in one synchronous
//! pass from the current inputs, so two rapid configuration changes always
//! leave the display consistent with the last change applied.

use super::filter::FilterSet;
use super::page::{PageInfo, Paginator};
use super::sort::{self, SortKey, SortRecord};
use super::store::{Keyed, LoadOutcome, LoadToken, RecordStore};

/// One computed view: the displayed sequence plus error and page metadata.
///
/// When the store is in an error state the items are empty and `error` is
/// set; stale data is never presented as success.
#[derive(Debug)]
pub struct CatalogView<T> {
    /// The displayed sequence, fully filtered, sorted, and sliced.
    pub items: Vec<T>,
    /// Error from the most recent failed load, if any.
    pub error: Option<String>,
    /// Page metadata, present only for paginated screens.
    pub page: Option<PageInfo>,
}

/// Controller for one list screen, parametrized by record type `T` and the
/// screen's filter configuration `F`.
///
/// The screen supplies a `build` function translating its filter
/// configuration into a declarative [`FilterSet`]; everything downstream of
/// that is shared.
pub struct ScreenController<T, F> {
    store: RecordStore<T>,
    filters: F,
    sort: SortKey,
    paginator: Option<Paginator>,
    build: fn(&F) -> FilterSet<T>,
}

impl<T, F> ScreenController<T, F>
where
    T: Clone + SortRecord + Keyed + 'static,
{
    /// Create a controller with an empty store.
    #[must_use]
    pub fn new(build: fn(&F) -> FilterSet<T>, filters: F, sort: SortKey) -> Self {
        Self {
            store: RecordStore::new(),
            filters,
            sort,
            paginator: None,
            build,
        }
    }

    /// Enable pagination with the given page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator = Some(Paginator::new(page_size));
        self
    }

    /// The current filter configuration.
    pub const fn filters(&self) -> &F {
        &self.filters
    }

    /// The current sort key.
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Read access to the store.
    pub const fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// Start a load attempt. See [`RecordStore::begin_load`].
    pub fn begin_load(&mut self) -> LoadToken {
        self.store.begin_load()
    }

    /// Apply a load result; a fresh dataset jumps back to page 1.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<T>, String>,
    ) -> LoadOutcome {
        let outcome = self.store.complete_load(token, result);
        if outcome == LoadOutcome::Applied
            && let Some(paginator) = &mut self.paginator
        {
            paginator.reset();
        }
        outcome
    }

    /// Replace the whole dataset outside the load protocol, e.g. with
    /// prefetched records. Jumps back to page 1.
    pub fn ingest(&mut self, records: Vec<T>) {
        self.store.replace(records);
        if let Some(paginator) = &mut self.paginator {
            paginator.reset();
        }
    }

    /// Replace the filter configuration. Resets pagination to page 1 so a
    /// stale page index never survives a narrower result.
    pub fn set_filters(&mut self, filters: F) {
        self.filters = filters;
        if let Some(paginator) = &mut self.paginator {
            paginator.reset();
        }
    }

    /// Replace the sort key. The result set size is unchanged, so the
    /// current page stays valid and is kept.
    pub const fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Request a page (1-based, clamped at view time). No-op on screens
    /// without pagination.
    pub fn set_page(&mut self, page: usize) {
        if let Some(paginator) = &mut self.paginator {
            paginator.set_page(page);
        }
    }

    /// Drop one record after a round-tripped delete.
    pub fn remove_record(&mut self, key: &str) -> bool {
        self.store.remove(key)
    }

    /// Patch one record after a round-tripped edit.
    pub fn update_record(&mut self, record: T) -> bool {
        self.store.update(record)
    }

    /// Recompute the displayed sequence from the current inputs.
    ///
    /// `sorted(filter(records))`, then the page slice when pagination is
    /// enabled. The result replaces any prior view atomically; no caller
    /// ever observes a partially-filtered intermediate.
    #[must_use]
    pub fn view(&self) -> CatalogView<T> {
        if let Some(message) = self.store.error() {
            return CatalogView {
                items: Vec::new(),
                error: Some(message.to_owned()),
                page: None,
            };
        }

        let filter = (self.build)(&self.filters);
        let mut items: Vec<T> = self
            .store
            .records()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        sort::apply(&mut items, self.sort);

        match &self.paginator {
            Some(paginator) => {
                let (window, info) = paginator.slice(&items);
                CatalogView {
                    items: window.to_vec(),
                    error: None,
                    page: Some(info),
                }
            }
            None => CatalogView {
                items,
                error: None,
                page: None,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductCategory, ProductId};
    use rust_decimal::Decimal;

    #[derive(Default)]
    struct Filters {
        query: String,
        category: Option<ProductCategory>,
    }

    fn build(filters: &Filters) -> FilterSet<Product> {
        FilterSet::new()
            .text(&filters.query, vec![|p: &Product| p.name.as_str()])
            .select(filters.category, |p: &Product| p.category)
    }

    fn product(id: &str, name: &str, price: i64, category: ProductCategory) -> Product {
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

    fn controller() -> ScreenController<Product, Filters> {
        let mut controller = ScreenController::new(build, Filters::default(), SortKey::Featured);
        let token = controller.begin_load();
        controller.complete_load(
            token,
            Ok(vec![
                product("a", "Ceramic Vase", 50, ProductCategory::Decor),
                product("b", "Oak Bench", 150, ProductCategory::Furniture),
                product("c", "Jute Basket", 80, ProductCategory::Decor),
            ]),
        );
        controller
    }

    fn ids(view: &CatalogView<Product>) -> Vec<&str> {
        view.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_yields_store_order() {
        let controller = controller();
        let view = controller.view();
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_category_filter_with_price_sort() {
        let mut controller = controller();
        controller.set_filters(Filters {
            query: String::new(),
            category: Some(ProductCategory::Decor),
        });
        controller.set_sort(SortKey::PriceLow);
        assert_eq!(ids(&controller.view()), vec!["a", "c"]);
    }

    #[test]
    fn test_view_is_subsequence_and_idempotent() {
        let mut controller = controller();
        controller.set_filters(Filters {
            query: "a".to_owned(),
            category: None,
        });
        controller.set_sort(SortKey::PriceHigh);
        let first = controller.view();

        // Every displayed record exists in the store, no duplicates.
        for item in &first.items {
            assert!(controller.store().get(item.id.as_str()).is_some());
        }
        let mut seen = first.items.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        seen.dedup();
        assert_eq!(seen.len(), first.items.len());

        // Re-running the pipeline on its own output changes nothing.
        let mut rerun = ScreenController::new(build, Filters::default(), SortKey::PriceHigh);
        let token = rerun.begin_load();
        rerun.complete_load(token, Ok(first.items.clone()));
        rerun.set_filters(Filters {
            query: "a".to_owned(),
            category: None,
        });
        assert_eq!(ids(&rerun.view()), ids(&first));
    }

    #[test]
    fn test_error_state_exposes_empty_view_with_error() {
        let mut controller = controller();
        let token = controller.begin_load();
        controller.complete_load(token, Err("503 from upstream".to_owned()));

        let view = controller.view();
        assert!(view.items.is_empty());
        assert_eq!(view.error.as_deref(), Some("503 from upstream"));
    }

    #[test]
    fn test_filter_change_resets_pagination() {
        let mut controller = ScreenController::new(build, Filters::default(), SortKey::Featured)
            .with_page_size(2);
        let token = controller.begin_load();
        controller.complete_load(
            token,
            Ok(vec![
                product("a", "Vase", 10, ProductCategory::Decor),
                product("b", "Bench", 20, ProductCategory::Furniture),
                product("c", "Basket", 30, ProductCategory::Decor),
            ]),
        );

        controller.set_page(2);
        assert_eq!(controller.view().page.unwrap().page, 2);

        controller.set_filters(Filters {
            query: String::new(),
            category: Some(ProductCategory::Decor),
        });
        let view = controller.view();
        assert_eq!(view.page.unwrap().page, 1);
        assert_eq!(ids(&view), vec!["a", "c"]);
    }
}
