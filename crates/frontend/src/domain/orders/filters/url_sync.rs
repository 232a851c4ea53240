//! FilterState <-> query string.

use contracts::domain::orders::StatusFilter;

use super::state::FilterState;
use crate::shared::query_store::{QueryParams, QueryStore};

pub const ORDER_ID_KEY: &str = "orderId";
pub const CUSTOMER_NAME_KEY: &str = "customerName";
pub const STATUS_KEY: &str = "status";

/// Reads and writes the filter keys of the page URL.
///
/// Only `orderId`, `customerName` and `status` are touched; every other key
/// keeps its value and position.
#[derive(Debug, Clone, Copy)]
pub struct UrlSynchronizer<S> {
    store: S,
}

impl<S: QueryStore> UrlSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn read(&self) -> FilterState {
        filters_from_params(&QueryParams::parse(&self.store.search()))
    }

    /// Replaces the filter keys of the current history entry.
    pub fn write(&self, filters: &FilterState) {
        let current = self.store.search();
        let mut params = QueryParams::parse(&current);
        apply_filters(&mut params, filters);

        let next = params.to_search();
        if next != current {
            log::debug!("filters -> url: {:?} -> {:?}", current, next);
            self.store.replace_search(&next);
        }
    }
}

pub fn filters_from_params(params: &QueryParams) -> FilterState {
    let status = match params.get(STATUS_KEY) {
        Some(raw) => {
            let status = StatusFilter::from_code_or_all(raw);
            if status.is_all() && raw.trim() != StatusFilter::ALL_CODE {
                log::debug!("unknown status {:?} in url, using all", raw);
            }
            status
        }
        None => StatusFilter::All,
    };

    FilterState::new(
        params.get(ORDER_ID_KEY).map(str::to_string),
        params.get(CUSTOMER_NAME_KEY).map(str::to_string),
        status,
    )
}

/// Writes `filters` into `params`, omitting unset values and `status=all`.
pub fn apply_filters(params: &mut QueryParams, filters: &FilterState) {
    params.set_or_remove(ORDER_ID_KEY, non_empty(&filters.order_id));
    params.set_or_remove(CUSTOMER_NAME_KEY, non_empty(&filters.customer_name));
    let status = (!filters.status.is_all()).then(|| filters.status.code());
    params.set_or_remove(STATUS_KEY, status);
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_store::MemoryQueryStore;
    use contracts::domain::orders::OrderStatus;

    fn sync(search: &str) -> (UrlSynchronizer<MemoryQueryStore>, MemoryQueryStore) {
        let store = MemoryQueryStore::new(search);
        (UrlSynchronizer::new(store.clone()), store)
    }

    #[test]
    fn test_read_scenario() {
        let state = sync("?orderId=42&status=pending").0.read();
        assert_eq!(
            state,
            FilterState {
                order_id: Some("42".to_string()),
                customer_name: None,
                status: StatusFilter::Only(OrderStatus::Pending),
            }
        );
    }

    #[test]
    fn test_unknown_status_reads_as_all() {
        assert_eq!(sync("?status=bogus").0.read().status, StatusFilter::All);
        assert_eq!(sync("?status=").0.read().status, StatusFilter::All);
        assert_eq!(sync("").0.read(), FilterState::default());
    }

    #[test]
    fn test_empty_values_read_as_unset() {
        let state = sync("?orderId=&customerName=").0.read();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_roundtrip_for_every_status() {
        for status in StatusFilter::all() {
            let (sync, store) = sync("");
            let state = FilterState::new(
                Some("a1b2".to_string()),
                Some("Maria da Silva".to_string()),
                status,
            );
            sync.write(&state);
            assert_eq!(sync.read(), state);

            let search = store.search();
            sync.write(&sync.read());
            assert_eq!(store.search(), search);
        }
    }

    #[test]
    fn test_write_defaults_removes_filter_keys() {
        let (sync, store) = sync("?orderId=42&customerName=Ana&status=delivered");
        sync.write(&FilterState::default());
        assert_eq!(store.search(), "");
    }

    #[test]
    fn test_write_preserves_unrelated_keys() {
        let (sync, store) = sync("?pageIndex=2&orderId=1&tab=open");
        sync.write(&FilterState::new(
            None,
            Some("Ana".into()),
            StatusFilter::Only(OrderStatus::Canceled),
        ));
        assert_eq!(
            store.search(),
            "?pageIndex=2&tab=open&customerName=Ana&status=canceled"
        );
    }

    #[test]
    fn test_write_keeps_unrelated_segments_verbatim() {
        let (sync, store) = sync("?ref=%FF&flag&status=pending");
        sync.write(&FilterState::new(
            None,
            None,
            StatusFilter::Only(OrderStatus::Delivered),
        ));
        assert_eq!(store.search(), "?ref=%FF&flag&status=delivered");
    }

    #[test]
    fn test_write_without_change_does_not_touch_history() {
        let (sync, store) = sync("?status=pending");
        sync.write(&FilterState::new(
            None,
            None,
            StatusFilter::Only(OrderStatus::Pending),
        ));
        assert_eq!(store.replacements(), 0);
    }
}
