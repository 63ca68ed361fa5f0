//! User management endpoints.

use tracing::instrument;

use maison_core::{User, UserId};

use super::{Acknowledgement, AdminClient, AdminError};

impl AdminClient {
    /// Fetch every registered user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn all_users(&self) -> Result<Vec<User>, AdminError> {
        self.get_json("/user/all").await
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &UserId) -> Result<(), AdminError> {
        let _: Acknowledgement = self.delete_json(&format!("/user/{id}")).await?;
        Ok(())
    }
}
