//! Commerce REST API client, admin identity space.
//!
//! Every endpoint here requires the admin bearer token, so the client
//! takes it at construction; a token-less admin client cannot exist.
//! Mutations return the server's canonical record (or confirmation) so
//! callers can patch their stores without a refetch.

mod orders;
mod products;
mod users;

pub use orders::{OrderListQuery, OrderSearchType, OrdersPage};
pub use products::ProductRequest;

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use maison_core::TransitionError;

use crate::config::AdminConfig;

/// Errors that can occur when talking to the admin API.
#[derive(Debug, Error)]
pub enum AdminError {
    /// HTTP transport failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a body excerpt if none was given.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A path could not be joined onto the base URL.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// A status change rejected before any request was sent.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Error payload shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Confirmation payload for deletes.
#[derive(Debug, Deserialize)]
pub(crate) struct Acknowledgement {
    #[allow(dead_code)]
    pub(crate) message: String,
}

/// Client for the commerce REST API, admin identity space.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    base_url: url::Url,
    token: SecretString,
}

impl AdminClient {
    /// Create a new admin client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AdminConfig) -> Result<Self, AdminError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                base_url: config.base_url.clone(),
                token: config.admin_token.clone(),
            }),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, AdminError> {
        let url = self.inner.base_url.join(path)?;
        let builder = self
            .inner
            .client
            .request(method, url)
            .bearer_auth(self.inner.token.expose_secret());
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        let builder = self.request(reqwest::Method::GET, path)?;
        Self::execute(builder).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &impl serde::Serialize,
    ) -> Result<T, AdminError> {
        let builder = self.request(reqwest::Method::GET, path)?.query(query);
        Self::execute(builder).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, AdminError> {
        let builder = self.request(reqwest::Method::POST, path)?.json(body);
        Self::execute(builder).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, AdminError> {
        let builder = self.request(reqwest::Method::PUT, path)?.json(body);
        Self::execute(builder).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AdminError> {
        let builder = self.request(reqwest::Method::DELETE, path)?;
        Self::execute(builder).await
    }

    /// Send a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, AdminError> {
        let response = builder.send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(AdminError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            // Prefer the server-supplied message, fall back to a body excerpt
            let message = serde_json::from_str::<ErrorBody>(&response_text)
                .map(|body| body.message)
                .unwrap_or_else(|_| response_text.chars().take(200).collect());
            tracing::error!(
                status = %status,
                message = %message,
                "Admin API returned non-success status"
            );
            return Err(AdminError::Status {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse admin API response"
                );
                Err(AdminError::Parse(e))
            }
        }
    }
}
