//! Commerce REST API client.
//!
//! JSON-over-HTTPS calls against the remote backend. Product list
//! responses are cached with `moka` (5-minute TTL); mutations always
//! bypass the cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use maison_storefront::api::ApiClient;
//!
//! let api = ApiClient::new(&config.api)?;
//!
//! // Browse the catalog
//! let products = api.all_products().await?;
//!
//! // Place an order (requires a session token)
//! let api = api.with_token(session_token);
//! let order = api.place_order(&request).await?;
//! ```

mod orders;
mod products;

pub use orders::{OrderItemRequest, OrderRequest};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use maison_core::Product;

use crate::config::ApiConfig;

/// Errors that can occur when talking to the commerce API.
#[derive(Debug, Error)]
pub enum ApiError {
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
}

/// Error payload shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the commerce REST API, customer identity space.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: url::Url,
    token: Option<SecretString>,
    product_cache: Cache<String, Arc<Vec<Product>>>,
}

impl ApiClient {
    /// Create a new API client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let product_cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
                token: None,
                product_cache,
            }),
        })
    }

    /// A copy of this client carrying a customer bearer token.
    #[must_use]
    pub fn with_token(&self, token: SecretString) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: self.inner.client.clone(),
                base_url: self.inner.base_url.clone(),
                token: Some(token),
                product_cache: self.inner.product_cache.clone(),
            }),
        }
    }

    /// Whether this client carries a session token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_some()
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = self.inner.base_url.join(path)?;
        let mut builder = self.inner.client.request(method, url);
        if let Some(token) = &self.inner.token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(reqwest::Method::GET, path)?;
        Self::execute(builder).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let builder = self.request(reqwest::Method::POST, path)?.json(body);
        Self::execute(builder).await
    }

    /// Send a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
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
            return Err(ApiError::RateLimited(retry_after));
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
                "Commerce API returned non-success status"
            );
            return Err(ApiError::Status {
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
                    "Failed to parse commerce API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    pub(crate) fn product_cache(&self) -> &Cache<String, Arc<Vec<Product>>> {
        &self.inner.product_cache
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_with_token_marks_authenticated() {
        let api = client();
        assert!(!api.is_authenticated());
        let api = api.with_token(SecretString::from("tok_123"));
        assert!(api.is_authenticated());
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Product not found"}"#).unwrap();
        assert_eq!(body.message, "Product not found");
    }
}
