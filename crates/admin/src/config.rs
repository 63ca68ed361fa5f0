//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MAISON_API_BASE_URL` - Base URL of the commerce REST API
//! - `MAISON_ADMIN_TOKEN` - Admin bearer token
//!
//! ## Optional
//! - `MAISON_API_TIMEOUT_SECS` - HTTP request timeout (default: 30)

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

/// Admin application configuration.
///
/// The base URL is explicit configuration handed to the client constructor;
/// there is no process-wide ambient endpoint.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the REST API, e.g. `https://api.maison.example`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Admin bearer token. Required: every back-office endpoint is
    /// authenticated.
    pub admin_token: SecretString,
}

impl AdminConfig {
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
        let admin_token = SecretString::from(get_required_env("MAISON_ADMIN_TOKEN")?);

        Ok(Self {
            base_url,
            timeout_secs,
            admin_token,
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

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_join_shape() {
        let base: Url = "https://api.maison.example".parse().unwrap();
        let joined = base.join("/order/orders").unwrap();
        assert_eq!(joined.as_str(), "https://api.maison.example/order/orders");
    }
}
