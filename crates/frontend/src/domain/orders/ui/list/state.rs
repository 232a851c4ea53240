use contracts::domain::orders::{OrderDto, OrderListMeta, OrderListResponse};
use leptos::prelude::*;

use crate::domain::orders::filters::{FilterState, UrlSynchronizer};
use crate::shared::query_store::{QueryParams, QueryStore};

/// URL key of the current page (0-based, omitted for the first page)
pub const PAGE_INDEX_KEY: &str = "pageIndex";

#[derive(Clone, Debug, Default)]
pub struct OrdersListState {
    pub orders: Vec<OrderDto>,
    pub meta: Option<OrderListMeta>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Id of the latest issued request; older responses are dropped
    generation: u64,
}

impl OrdersListState {
    /// Marks a new fetch as in flight and returns its id
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a response if it belongs to the latest request.
    ///
    /// Returns `false` for a stale response, which is ignored.
    pub fn finish_request(
        &mut self,
        generation: u64,
        result: Result<OrderListResponse, String>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale orders response #{} (latest #{})",
                generation,
                self.generation
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(response) => {
                self.orders = response.orders;
                self.meta = Some(response.meta);
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    pub fn total_count(&self) -> usize {
        self.meta.map(|m| m.total_count).unwrap_or(0)
    }

    pub fn total_pages(&self) -> usize {
        self.meta.map(|m| m.total_pages()).unwrap_or(0)
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

pub fn read_page_index<S: QueryStore>(store: &S) -> usize {
    QueryParams::parse(&store.search())
        .get(PAGE_INDEX_KEY)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

pub fn write_page_index<S: QueryStore>(store: &S, page_index: usize) {
    let current = store.search();
    let mut params = QueryParams::parse(&current);
    let value = (page_index > 0).then(|| page_index.to_string());
    params.set_or_remove(PAGE_INDEX_KEY, value.as_deref());

    let next = params.to_search();
    if next != current {
        store.replace_search(&next);
    }
}

/// Commits filters to the URL and sends the listing back to its first page.
///
/// Returns the page index to show.
pub fn commit_filters<S: QueryStore + Clone>(store: &S, filters: &FilterState) -> usize {
    UrlSynchronizer::new(store.clone()).write(filters);
    write_page_index(store, 0);
    0
}

/// Formats an amount in cents as Brazilian reais, e.g. `R$ 1.234,50`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = (abs / 100).to_string();
    let centavos = abs % 100;

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, ch) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{}R$ {},{:02}", sign, grouped, centavos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::filters::{FilterField, FormState, OrderFilterController};
    use crate::shared::query_store::MemoryQueryStore;
    use contracts::domain::orders::{OrderStatus, StatusFilter};

    fn response(order_id: &str) -> OrderListResponse {
        OrderListResponse {
            orders: vec![OrderDto {
                order_id: order_id.to_string(),
                created_at: "2024-03-15T14:02:26Z".to_string(),
                status: OrderStatus::Pending,
                customer_name: "Maria".to_string(),
                total: 4590,
            }],
            meta: OrderListMeta {
                page_index: 0,
                per_page: 10,
                total_count: 11,
            },
        }
    }

    #[test]
    fn test_latest_response_wins() {
        let mut state = OrdersListState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(state.finish_request(second, Ok(response("new"))));
        assert!(!state.finish_request(first, Ok(response("old"))));

        assert_eq!(state.orders[0].order_id, "new");
        assert!(!state.is_loading);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_stale_response_keeps_loading() {
        let mut state = OrdersListState::default();
        let first = state.begin_request();
        state.begin_request();

        assert!(!state.finish_request(first, Err("timeout".to_string())));
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_error_is_recorded() {
        let mut state = OrdersListState::default();
        let id = state.begin_request();
        state.finish_request(id, Err("Failed to load orders: 500".to_string()));
        assert_eq!(state.error.as_deref(), Some("Failed to load orders: 500"));
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn test_page_index_in_url() {
        let store = MemoryQueryStore::new("?status=pending");
        assert_eq!(read_page_index(&store), 0);

        write_page_index(&store, 3);
        assert_eq!(store.search(), "?status=pending&pageIndex=3");
        assert_eq!(read_page_index(&store), 3);

        write_page_index(&store, 0);
        assert_eq!(store.search(), "?status=pending");
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let store = MemoryQueryStore::new("?pageIndex=3&status=pending");
        let controller = OrderFilterController::new(store.clone());
        let mut form = controller.initialize();
        form.on_field_change(FilterField::OrderId, "77".to_string());

        let committed = controller.apply(&form);
        assert_eq!(commit_filters(&store, &committed), 0);

        assert_eq!(store.search(), "?status=pending&orderId=77");
        assert_eq!(read_page_index(&store), 0);
    }

    #[test]
    fn test_clear_filters_resets_page() {
        let store = MemoryQueryStore::new("?pageIndex=3&status=pending");
        let controller = OrderFilterController::new(store.clone());

        let (form, committed) = controller.clear();
        assert_eq!(form, FormState::default());
        assert_eq!(commit_filters(&store, &committed), 0);

        assert_eq!(store.search(), "");
    }

    #[test]
    fn test_commit_on_first_page_keeps_url() {
        let store = MemoryQueryStore::new("?status=pending");
        commit_filters(
            &store,
            &FilterState::new(None, None, StatusFilter::Only(OrderStatus::Pending)),
        );
        assert_eq!(store.replacements(), 0);
    }

    #[test]
    fn test_invalid_page_index_is_first_page() {
        let store = MemoryQueryStore::new("?pageIndex=-1");
        assert_eq!(read_page_index(&store), 0);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(4590), "R$ 45,90");
        assert_eq!(format_cents(5), "R$ 0,05");
        assert_eq!(format_cents(123_450), "R$ 1.234,50");
        assert_eq!(format_cents(-100_000_000), "-R$ 1.000.000,00");
    }
}
