use contracts::domain::orders::{OrderListQuery, OrderListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Query string for `GET /orders`; unset filters are left out
pub fn orders_query_string(query: &OrderListQuery) -> Result<String, String> {
    serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))
}

/// Fetch one page of orders
pub async fn fetch_orders(query: &OrderListQuery) -> Result<OrderListResponse, String> {
    let url = api_url(&format!("/orders?{}", orders_query_string(query)?));
    log::debug!("Loading orders: {}", url);

    let response = Request::get(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load orders: {}", response.status()));
    }

    response
        .json::<OrderListResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::OrderStatus;

    #[test]
    fn test_query_string_skips_unset_filters() {
        let query = OrderListQuery {
            page_index: 0,
            ..Default::default()
        };
        assert_eq!(orders_query_string(&query).unwrap(), "pageIndex=0");
    }

    #[test]
    fn test_query_string_with_filters() {
        let query = OrderListQuery {
            page_index: 2,
            order_id: Some("42".to_string()),
            customer_name: Some("Maria".to_string()),
            status: Some(OrderStatus::Delivering),
        };
        assert_eq!(
            orders_query_string(&query).unwrap(),
            "pageIndex=2&orderId=42&customerName=Maria&status=delivering"
        );
    }
}
