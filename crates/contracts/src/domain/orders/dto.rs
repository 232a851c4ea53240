use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Строка таблицы заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: String,
    pub created_at: String,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Сумма в центах
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListMeta {
    pub page_index: usize,
    pub per_page: usize,
    pub total_count: usize,
}

impl OrderListMeta {
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderDto>,
    pub meta: OrderListMeta,
}

/// Параметры запроса списка заказов.
///
/// Пустые фильтры не сериализуются, сервер трактует их отсутствие как "все".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    pub page_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let meta = OrderListMeta {
            page_index: 0,
            per_page: 10,
            total_count: 21,
        };
        assert_eq!(meta.total_pages(), 3);

        let empty = OrderListMeta {
            page_index: 0,
            per_page: 10,
            total_count: 0,
        };
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_parse_list_response() {
        let body = r#"{
            "orders": [{
                "orderId": "a1",
                "createdAt": "2024-03-15T14:02:26.123Z",
                "status": "processing",
                "customerName": "Maria",
                "total": 4590
            }],
            "meta": { "pageIndex": 0, "perPage": 10, "totalCount": 1 }
        }"#;
        let response: OrderListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.orders[0].status, OrderStatus::Processing);
        assert_eq!(response.orders[0].customer_name, "Maria");
        assert_eq!(response.meta.total_count, 1);
    }
}
