//! Order management commands (admin).
//!
//! # Environment Variables
//!
//! - `MAISON_API_BASE_URL` - Base URL of the commerce REST API
//! - `MAISON_ADMIN_TOKEN` - Admin bearer token

use thiserror::Error;

use maison_admin::api::{AdminClient, AdminError};
use maison_admin::config::{AdminConfig, ConfigError};
use maison_admin::screens::{OrdersScreen, SearchField};

use maison_core::{Order, OrderId, OrderStatus};

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed or a status transition was rejected.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// The order fetch failed; the message comes from the screen state.
    #[error("Order load failed: {0}")]
    Load(String),

    /// An unrecognized order status was given.
    #[error("Invalid status: {0}. Valid: pending, processing, shipped, delivered, cancelled")]
    InvalidStatus(String),

    /// No order in the table has the given ID.
    #[error("No such order: {0}")]
    UnknownOrder(String),
}

fn screen() -> Result<OrdersScreen, OrdersError> {
    let config = AdminConfig::from_env()?;
    Ok(OrdersScreen::new(AdminClient::new(&config)?))
}

/// List the order table with client-side filters and pagination.
pub async fn list(
    status: &str,
    start_date: &str,
    end_date: &str,
    search: &str,
    field: &str,
    page: usize,
) -> Result<(), OrdersError> {
    let mut screen = screen()?;
    screen.load().await;

    screen.set_status_param(status);
    screen.set_date_params(start_date, end_date);
    screen.set_search(search, parse_field(field));
    screen.set_page(page);

    let view = screen.view();
    if let Some(message) = view.error {
        return Err(OrdersError::Load(message));
    }

    if let Some(info) = view.page {
        tracing::info!(
            "Page {}/{} ({} order(s) total)",
            info.page,
            info.total_pages,
            info.total_items
        );
    }
    for order in &view.items {
        print_order(order);
    }
    Ok(())
}

/// Move an order to a new status.
pub async fn set_status(id: &str, status: &str) -> Result<(), OrdersError> {
    let to = status
        .parse::<OrderStatus>()
        .map_err(|_| OrdersError::InvalidStatus(status.to_owned()))?;

    let mut screen = screen()?;
    screen.load().await;

    let id = OrderId::new(id);
    if !screen.set_status(&id, to).await? {
        return Err(OrdersError::UnknownOrder(id.into_inner()));
    }
    tracing::info!("Order {id} moved to {to}");
    Ok(())
}

/// Delete an order.
pub async fn delete(id: &str) -> Result<(), OrdersError> {
    let mut screen = screen()?;
    let id = OrderId::new(id);
    screen.delete(&id).await?;
    tracing::info!("Order {id} deleted");
    Ok(())
}

/// Interpret the search-field argument; anything unrecognized falls back
/// to the default, like the screen's own dropdowns.
fn parse_field(raw: &str) -> SearchField {
    match raw.trim().to_ascii_lowercase().as_str() {
        "email" => SearchField::Email,
        "order-id" => SearchField::OrderId,
        _ => SearchField::CustomerName,
    }
}

fn print_order(order: &Order) {
    tracing::info!(
        "  {}  {}  {}  {}  {}",
        order.id,
        order.created_at.format("%Y-%m-%d"),
        order.customer_name,
        order.total,
        order.status
    );
}
