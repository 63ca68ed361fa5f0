//! The admin product table screen.
//!
//! Same pipeline as the storefront catalog, but tuned for management:
//! search also matches the category name, and edits and deletes patch the
//! store after the API round trip.

use tracing::instrument;

use maison_core::catalog::{CatalogView, FilterSet, LoadOutcome, ScreenController, SortKey};
use maison_core::{Product, ProductCategory, ProductId};

use crate::api::{AdminClient, AdminError, ProductRequest};

const PAGE_SIZE: usize = 10;

/// Category dropdown state, with `All` as the pass-everything sentinel
/// and unrecognized input degrading to "no match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// The "all" sentinel: no constraint.
    #[default]
    All,
    /// Only products in one category.
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

/// Filter configuration for the product table.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Search term matched against name and category.
    pub query: String,
    /// Category dropdown state.
    pub category: CategorySelection,
}

fn build_filters(filters: &ProductFilters) -> FilterSet<Product> {
    let set = FilterSet::new().text(
        &filters.query,
        vec![|p: &Product| p.name.as_str(), |p: &Product| {
            p.category.as_str()
        }],
    );
    match filters.category {
        CategorySelection::All => set,
        CategorySelection::Only(category) => set.select(Some(category), |p: &Product| p.category),
        CategorySelection::Unrecognized => set.never(),
    }
}

/// Controller for the admin product table.
pub struct ProductTableScreen {
    api: AdminClient,
    controller: ScreenController<Product, ProductFilters>,
}

impl ProductTableScreen {
    /// A screen with an empty store; call [`load`](Self::load) to populate.
    #[must_use]
    pub fn new(api: AdminClient) -> Self {
        Self {
            api,
            controller: ScreenController::new(
                build_filters,
                ProductFilters::default(),
                SortKey::Featured,
            )
            .with_page_size(PAGE_SIZE),
        }
    }

    /// Fetch the full catalog, generation-tagged like every list load.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.controller.begin_load();
        let result = self.api.all_products().await.map_err(|e| e.to_string());
        self.controller.complete_load(token, result)
    }

    /// Seed the store with records fetched elsewhere.
    pub fn ingest(&mut self, products: Vec<Product>) {
        self.controller.ingest(products);
    }

    /// Update the search box.
    pub fn set_query(&mut self, query: &str) {
        let mut filters = self.controller.filters().clone();
        filters.query = query.to_owned();
        self.controller.set_filters(filters);
    }

    /// Update the category dropdown from its raw value.
    pub fn set_category_param(&mut self, raw: &str) {
        let mut filters = self.controller.filters().clone();
        filters.category = CategorySelection::from_param(raw);
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

    /// Create a product, then refetch so the table shows the server's
    /// canonical list.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    pub async fn create(&mut self, request: &ProductRequest) -> Result<Product, AdminError> {
        let created = self.api.create_product(request).await?;
        self.load().await;
        Ok(created)
    }

    /// Update one product and patch it in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The store is left untouched
    /// on error.
    pub async fn update(
        &mut self,
        id: &ProductId,
        request: &ProductRequest,
    ) -> Result<(), AdminError> {
        let updated = self.api.update_product(id, request).await?;
        self.controller.update_record(updated);
        Ok(())
    }

    /// Delete one product and drop it from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The store is left untouched
    /// on error.
    pub async fn delete(&mut self, id: &ProductId) -> Result<(), AdminError> {
        self.api.delete_product(id).await?;
        self.controller.remove_record(id.as_str());
        Ok(())
    }

    /// The displayed sequence for the current configuration.
    #[must_use]
    pub fn view(&self) -> CatalogView<Product> {
        self.controller.view()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

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

    fn screen() -> ProductTableScreen {
        let config = crate::config::AdminConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 5,
            admin_token: secrecy::SecretString::from("admin_tok"),
        };
        let mut screen = ProductTableScreen::new(AdminClient::new(&config).unwrap());
        screen.ingest(vec![
            product("p1", "Ceramic Vase", 50, ProductCategory::Decor),
            product("p2", "Oak Bench", 150, ProductCategory::Furniture),
            product("p3", "Brass Lamp", 95, ProductCategory::Lighting),
        ]);
        screen
    }

    fn ids(view: &CatalogView<Product>) -> Vec<&str> {
        view.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_category_name_too() {
        let mut screen = screen();
        screen.set_query("lighting");
        assert_eq!(ids(&screen.view()), vec!["p3"]);
    }

    #[test]
    fn test_category_dropdown() {
        let mut screen = screen();
        screen.set_category_param("furniture");
        assert_eq!(ids(&screen.view()), vec!["p2"]);

        screen.set_category_param("antiques");
        assert!(screen.view().items.is_empty());

        screen.set_category_param("all");
        assert_eq!(screen.view().items.len(), 3);
    }

    #[test]
    fn test_sort_param_applies_to_table() {
        let mut screen = screen();
        screen.set_sort_param("price-high");
        assert_eq!(ids(&screen.view()), vec!["p2", "p3", "p1"]);
    }
}
