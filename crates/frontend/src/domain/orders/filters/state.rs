use contracts::domain::orders::{OrderListQuery, StatusFilter};

/// Committed order filters driving the list query.
///
/// Empty and unset free-text values are the same thing: both are stored as
/// `None`. Build through [`FilterState::new`] to get that normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(
        order_id: Option<String>,
        customer_name: Option<String>,
        status: StatusFilter,
    ) -> Self {
        Self {
            order_id: normalize_text(order_id),
            customer_name: normalize_text(customer_name),
            status,
        }
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of filters that narrow the list
    pub fn active_count(&self) -> usize {
        let text_filters = [&self.order_id, &self.customer_name]
            .iter()
            .filter(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
            .count();
        text_filters + usize::from(!self.status.is_all())
    }

    /// API query for one page of the filtered list
    pub fn to_list_query(&self, page_index: usize) -> OrderListQuery {
        OrderListQuery {
            page_index,
            order_id: normalize_text(self.order_id.clone()),
            customer_name: normalize_text(self.customer_name.clone()),
            status: self.status.as_status(),
        }
    }
}

pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
