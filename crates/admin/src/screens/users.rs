//! The admin user list screen.
//!
//! A small unpaginated list: text search over name and email, and account
//! deletion. Users carry no priced or dated fields, so the sort dropdown
//! is absent and store order is display order.

use tracing::instrument;

use maison_core::catalog::{CatalogView, FilterSet, LoadOutcome, ScreenController, SortKey};
use maison_core::{User, UserId};

use crate::api::{AdminClient, AdminError};

/// Filter configuration for the user list.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    /// Search term matched against name and email.
    pub query: String,
}

fn build_filters(filters: &UserFilters) -> FilterSet<User> {
    FilterSet::new().text(
        &filters.query,
        vec![|u: &User| u.name.as_str(), |u: &User| u.email.as_str()],
    )
}

/// Controller for the admin user list.
pub struct UsersScreen {
    api: AdminClient,
    controller: ScreenController<User, UserFilters>,
}

impl UsersScreen {
    /// A screen with an empty store; call [`load`](Self::load) to populate.
    #[must_use]
    pub fn new(api: AdminClient) -> Self {
        Self {
            api,
            controller: ScreenController::new(
                build_filters,
                UserFilters::default(),
                SortKey::Featured,
            ),
        }
    }

    /// Fetch all users, generation-tagged like every list load.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        let token = self.controller.begin_load();
        let result = self.api.all_users().await.map_err(|e| e.to_string());
        self.controller.complete_load(token, result)
    }

    /// Seed the store with records fetched elsewhere.
    pub fn ingest(&mut self, users: Vec<User>) {
        self.controller.ingest(users);
    }

    /// Update the search box.
    pub fn set_query(&mut self, query: &str) {
        self.controller.set_filters(UserFilters {
            query: query.to_owned(),
        });
    }

    /// Delete one account and drop it from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The store is left untouched
    /// on error.
    pub async fn delete(&mut self, id: &UserId) -> Result<(), AdminError> {
        self.api.delete_user(id).await?;
        self.controller.remove_record(id.as_str());
        Ok(())
    }

    /// The displayed sequence for the current configuration.
    #[must_use]
    pub fn view(&self) -> CatalogView<User> {
        self.controller.view()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maison_core::Email;

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_owned(),
            email: email.parse::<Email>().unwrap(),
            address: None,
            avatar_url: None,
        }
    }

    fn screen() -> UsersScreen {
        let config = crate::config::AdminConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 5,
            admin_token: secrecy::SecretString::from("admin_tok"),
        };
        let mut screen = UsersScreen::new(AdminClient::new(&config).unwrap());
        screen.ingest(vec![
            user("u1", "Jane Doe", "jane@example.com"),
            user("u2", "Ines Aubert", "ines@example.com"),
        ]);
        screen
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let mut screen = screen();
        screen.set_query("ines");
        let view = screen.view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items.first().unwrap().id.as_str(), "u2");

        screen.set_query("example.com");
        assert_eq!(screen.view().items.len(), 2);
    }
}
