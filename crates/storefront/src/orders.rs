//! The customer order-history screen.
//!
//! Orders are fetched once and filtered client-side by status through the
//! shared pipeline; sorting defaults to newest first.

use tracing::instrument;

use maison_core::catalog::{CatalogView, FilterSet, LoadOutcome, ScreenController, SortKey};
use maison_core::{Order, OrderStatus};

use crate::api::ApiClient;

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

/// Filter configuration for the order-history screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryFilters {
    /// Status dropdown state.
    pub status: StatusSelection,
}

fn build_filters(filters: &HistoryFilters) -> FilterSet<Order> {
    let set = FilterSet::new();
    match filters.status {
        StatusSelection::All => set,
        StatusSelection::Only(status) => set.select(Some(status), |o: &Order| o.status),
        StatusSelection::Unrecognized => set.never(),
    }
}

/// Controller for the order-history screen.
pub struct OrderHistoryScreen {
    api: ApiClient,
    controller: ScreenController<Order, HistoryFilters>,
}

impl OrderHistoryScreen {
    /// A screen with an empty store; call [`load`](Self::load) to populate.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: ScreenController::new(
                build_filters,
                HistoryFilters::default(),
                SortKey::Newest,
            ),
        }
    }

    /// Fetch the customer's orders, generation-tagged like every list load.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.controller.begin_load();
        let result = self.api.my_orders().await.map_err(|e| e.to_string());
        self.controller.complete_load(token, result)
    }

    /// Seed the store with records fetched elsewhere.
    pub fn ingest(&mut self, orders: Vec<Order>) {
        self.controller.ingest(orders);
    }

    /// Update the status dropdown from its raw value.
    pub fn set_status_param(&mut self, raw: &str) {
        self.controller.set_filters(HistoryFilters {
            status: StatusSelection::from_param(raw),
        });
    }

    /// The displayed sequence for the current configuration.
    #[must_use]
    pub fn view(&self) -> CatalogView<Order> {
        self.controller.view()
    }
}
