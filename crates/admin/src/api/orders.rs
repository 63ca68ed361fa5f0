//! Order management endpoints.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use maison_core::{Order, OrderId, OrderStatus};

use super::{Acknowledgement, AdminClient, AdminError};

/// Which order field a search term targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSearchType {
    /// Match against the customer's name.
    #[default]
    CustomerName,
    /// Match against the customer's email.
    Email,
    /// Match against the order ID.
    OrderId,
}

/// Query parameters for the server-side order listing.
///
/// All constraints are optional; absent fields are omitted from the query
/// string entirely rather than sent empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Restrict to one status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on the order date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on the order date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field the search term targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<OrderSearchType>,
}

/// One page of the server-side order listing.
#[derive(Debug, Deserialize)]
pub struct OrdersPage {
    /// Orders on this page.
    pub orders: Vec<Order>,
    /// Total matching orders across all pages.
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
}

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

impl AdminClient {
    /// Query the order listing with server-side filters and pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: &OrderListQuery) -> Result<OrdersPage, AdminError> {
        self.get_json_with_query("/order/orders", query).await
    }

    /// Fetch every order in one request, for client-side table screens.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>, AdminError> {
        let page = self
            .list_orders(&OrderListQuery {
                page: Some(1),
                limit: Some(1000),
                ..OrderListQuery::default()
            })
            .await?;
        Ok(page.orders)
    }

    /// Move an order to a new status.
    ///
    /// The transition is checked against the order lifecycle before any
    /// request is sent; an illegal move (backwards, out of a terminal
    /// state) fails locally with [`AdminError::Transition`].
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is illegal, the request fails,
    /// or the response cannot be parsed.
    #[instrument(skip(self, order), fields(order_id = %order.id, from = %order.status, to = %to))]
    pub async fn update_order_status(
        &self,
        order: &Order,
        to: OrderStatus,
    ) -> Result<Order, AdminError> {
        order.status.transition_to(to)?;
        self.put_json(&format!("/order/{}/status", order.id), &StatusBody { status: to })
            .await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &OrderId) -> Result<(), AdminError> {
        let _: Acknowledgement = self.delete_json(&format!("/order/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_omits_absent_fields() {
        let query = OrderListQuery {
            page: Some(2),
            limit: Some(10),
            ..OrderListQuery::default()
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(encoded, "page=2&limit=10");
    }

    #[test]
    fn test_query_uses_camel_case_keys() {
        let query = OrderListQuery {
            start_date: Some("2026-01-01".to_owned()),
            search: Some("ada".to_owned()),
            search_type: Some(OrderSearchType::CustomerName),
            ..OrderListQuery::default()
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(
            encoded,
            "startDate=2026-01-01&search=ada&searchType=customerName"
        );
    }

    #[test]
    fn test_orders_page_parses_total() {
        let page: OrdersPage =
            serde_json::from_str(r#"{"orders":[],"totalOrders":42}"#).unwrap();
        assert!(page.orders.is_empty());
        assert_eq!(page.total_orders, 42);
    }
}
