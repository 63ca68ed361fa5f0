//! The admin order table screen.
//!
//! Orders are fetched whole, then the table is driven entirely
//! client-side: status dropdown, order-date range, a field-targeted
//! search box, and a fixed page size of 10. Status updates and deletes
//! round-trip through the API, then patch the store in place.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;

use maison_core::catalog::{Bounds, CatalogView, FilterSet, LoadOutcome, ScreenController, SortKey};
use maison_core::{Order, OrderId, OrderStatus};

use crate::api::{AdminClient, AdminError};

const PAGE_SIZE: usize = 10;

/// Status dropdown state, with `All` as the pass-everything sentinel and
/// unrecognized input degrading to "no match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusSelection {
    /// The "all" sentinel: no constraint.
    #[default]
    All,
    /// Only orders with one status.
    Only(OrderStatus),
    /// An unrecognized value: matches nothing.
    Unrecognized,
}

impl StatusSelection {
    /// Interpret a raw dropdown value.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        trimmed
            .parse::<OrderStatus>()
            .map_or(Self::Unrecognized, Self::Only)
    }
}

/// Which order field the search box targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// The customer's display name.
    #[default]
    CustomerName,
    /// The customer's email.
    Email,
    /// The order ID.
    OrderId,
}

impl SearchField {
    fn accessor(self) -> fn(&Order) -> &str {
        match self {
            Self::CustomerName => |o: &Order| o.customer_name.as_str(),
            Self::Email => |o: &Order| o.customer_email.as_str(),
            Self::OrderId => |o: &Order| o.id.as_str(),
        }
    }
}

/// Filter configuration for the order table.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    /// Status dropdown state.
    pub status: StatusSelection,
    /// Inclusive bounds on the order date.
    pub placed: Bounds<DateTime<Utc>>,
    /// Search term; blank means no constraint.
    pub search: String,
    /// The field the search term targets.
    pub field: SearchField,
}

fn build_filters(filters: &OrderFilters) -> FilterSet<Order> {
    let set = FilterSet::new()
        .text(&filters.search, vec![filters.field.accessor()])
        .range(filters.placed, |o: &Order| o.created_at);
    match filters.status {
        StatusSelection::All => set,
        StatusSelection::Only(status) => set.select(Some(status), |o: &Order| o.status),
        StatusSelection::Unrecognized => set.never(),
    }
}

/// Interpret raw `YYYY-MM-DD` date fields as inclusive day bounds.
///
/// Blank or malformed input on either side coerces to unbounded on that
/// side, like the price bounds on the catalog screen.
#[must_use]
pub fn parse_date_bounds(start: &str, end: &str) -> Bounds<DateTime<Utc>> {
    Bounds {
        min: parse_day(start).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc()),
        max: parse_day(end).and_then(|d| d.and_hms_opt(23, 59, 59)).map(|dt| dt.and_utc()),
    }
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Controller for the admin order table.
pub struct OrdersScreen {
    api: AdminClient,
    controller: ScreenController<Order, OrderFilters>,
}

impl OrdersScreen {
    /// A screen with an empty store; call [`load`](Self::load) to populate.
    #[must_use]
    pub fn new(api: AdminClient) -> Self {
        Self {
            api,
            controller: ScreenController::new(
                build_filters,
                OrderFilters::default(),
                SortKey::Newest,
            )
            .with_page_size(PAGE_SIZE),
        }
    }

    /// Fetch all orders, generation-tagged like every list load.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.controller.begin_load();
        let result = self.api.all_orders().await.map_err(|e| e.to_string());
        self.controller.complete_load(token, result)
    }

    /// Seed the store with records fetched elsewhere.
    pub fn ingest(&mut self, orders: Vec<Order>) {
        self.controller.ingest(orders);
    }

    /// Update the status dropdown from its raw value.
    pub fn set_status_param(&mut self, raw: &str) {
        let mut filters = self.controller.filters().clone();
        filters.status = StatusSelection::from_param(raw);
        self.controller.set_filters(filters);
    }

    /// Update the date range from its raw `YYYY-MM-DD` field values.
    pub fn set_date_params(&mut self, start: &str, end: &str) {
        let mut filters = self.controller.filters().clone();
        filters.placed = parse_date_bounds(start, end);
        self.controller.set_filters(filters);
    }

    /// Update the search box and its target field.
    pub fn set_search(&mut self, term: &str, field: SearchField) {
        let mut filters = self.controller.filters().clone();
        filters.search = term.to_owned();
        filters.field = field;
        self.controller.set_filters(filters);
    }

    /// Update the sort dropdown from its raw value.
    pub fn set_sort_param(&mut self, raw: &str) {
        self.controller.set_sort(SortKey::from_param(raw));
    }

    /// Request a page (1-based, clamped at view time).
    pub fn set_page(&mut self, page: usize) {
        self.controller.set_page(page);
    }

    /// Move one order to a new status and patch it in place.
    ///
    /// Returns `false` if the order is not in the store; nothing is sent
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is illegal or the request fails.
    /// The store is left untouched on error.
    pub async fn set_status(&mut self, id: &OrderId, to: OrderStatus) -> Result<bool, AdminError> {
        let Some(order) = self.controller.store().get(id.as_str()).cloned() else {
            return Ok(false);
        };
        let updated = self.api.update_order_status(&order, to).await?;
        Ok(self.controller.update_record(updated))
    }

    /// Delete one order and drop it from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The store is left untouched
    /// on error.
    pub async fn delete(&mut self, id: &OrderId) -> Result<(), AdminError> {
        self.api.delete_order(id).await?;
        self.controller.remove_record(id.as_str());
        Ok(())
    }

    /// The displayed sequence for the current configuration.
    #[must_use]
    pub fn view(&self) -> CatalogView<Order> {
        self.controller.view()
    }
}
