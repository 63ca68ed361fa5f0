//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MAISON_API_BASE_URL` - Base URL of the commerce REST API
//!
//! ## Optional
//! - `MAISON_API_TIMEOUT_SECS` - HTTP request timeout (default: 30)
//! - `MAISON_SESSION_FILE` - Path to the persisted customer session
//!   (default: `.maison/session.json`)
//! - `MAISON_WISHLIST_FILE` - Path to the client-only wishlist
//!   (default: `.maison/wishlist.json`)
//! - `MAISON_CUSTOMER_TOKEN` - Seed bearer token, overrides the session file

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the commerce API.
///
/// The base URL is explicit configuration handed to the client constructor;
/// there is no process-wide ambient endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST API, e.g. `https://api.maison.example`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Commerce API connection settings.
    pub api: ApiConfig,
    /// Where the customer session token is persisted.
    pub session_file: PathBuf,
    /// Where the client-only wishlist is persisted.
    pub wishlist_file: PathBuf,
    /// Optional seed token, taking precedence over the session file.
    pub customer_token: Option<SecretString>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            api: ApiConfig::from_env()?,
            session_file: get_env_or_default("MAISON_SESSION_FILE", ".maison/session.json").into(),
            wishlist_file: get_env_or_default("MAISON_WISHLIST_FILE", ".maison/wishlist.json")
                .into(),
            customer_token: get_optional_env("MAISON_CUSTOMER_TOKEN").map(SecretString::from),
        })
    }
}

impl ApiConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_required_env("MAISON_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MAISON_API_BASE_URL".to_string(), e.to_string())
            })?;
        let timeout_secs = get_env_or_default("MAISON_API_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MAISON_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_rejects_bad_url() {
        let result = "not a url".parse::<Url>();
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_join_shape() {
        let config = ApiConfig {
            base_url: "https://api.maison.example".parse().unwrap(),
            timeout_secs: 30,
        };
        let joined = config.base_url.join("/products/all").unwrap();
        assert_eq!(joined.as_str(), "https://api.maison.example/products/all");
    }
}
