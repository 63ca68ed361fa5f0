//! Dashboard command (admin).
//!
//! # Environment Variables
//!
//! - `MAISON_API_BASE_URL` - Base URL of the commerce REST API
//! - `MAISON_ADMIN_TOKEN` - Admin bearer token

use thiserror::Error;

use maison_admin::api::{AdminClient, AdminError};
use maison_admin::config::{AdminConfig, ConfigError};
use maison_admin::dashboard::DashboardMetrics;

/// Errors that can occur during the dashboard command.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Admin(#[from] AdminError),
}

/// Fetch orders and products, derive the aggregates, print them.
pub async fn show() -> Result<(), DashboardError> {
    let config = AdminConfig::from_env()?;
    let api = AdminClient::new(&config)?;

    let orders = api.all_orders().await?;
    let products = api.all_products().await?;
    let metrics = DashboardMetrics::compute(&orders, &products);

    tracing::info!("Orders:   {}", metrics.total_orders);
    tracing::info!("Products: {}", metrics.total_products);
    tracing::info!("Revenue:  {}", metrics.revenue);
    for (status, count) in &metrics.status_counts {
        tracing::info!("  {status}: {count}");
    }
    if !metrics.low_stock.is_empty() {
        tracing::warn!("{} product(s) low on stock:", metrics.low_stock.len());
        for product in &metrics.low_stock {
            tracing::warn!(
                "  {}  {}  ({} left)",
                product.id,
                product.name,
                product.stock.unwrap_or(0)
            );
        }
    }
    Ok(())
}
