use contracts::domain::orders::StatusFilter;

use super::state::FilterState;
use super::url_sync::UrlSynchronizer;
use crate::shared::query_store::QueryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    OrderId,
    CustomerName,
    Status,
}

/// Uncommitted filter inputs, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub order_id: String,
    pub customer_name: String,
    /// Raw select value
    pub status: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            customer_name: String::new(),
            status: StatusFilter::ALL_CODE.to_string(),
        }
    }
}

impl FormState {
    /// Seeds the inputs from the committed filters
    pub fn initialize(filters: &FilterState) -> Self {
        Self {
            order_id: filters.order_id.clone().unwrap_or_default(),
            customer_name: filters.customer_name.clone().unwrap_or_default(),
            status: filters.status.code().to_string(),
        }
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::OrderId => &self.order_id,
            FilterField::CustomerName => &self.customer_name,
            FilterField::Status => &self.status,
        }
    }

    /// Keystroke-level edit; touches nothing outside the form.
    pub fn on_field_change(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::OrderId => self.order_id = value,
            FilterField::CustomerName => self.customer_name = value,
            FilterField::Status => self.status = value,
        }
    }

    /// Maps the inputs to filters: free text is trimmed, status goes
    /// through the total mapping (anything unknown is "all").
    pub fn submit(&self) -> FilterState {
        FilterState::new(
            Some(self.order_id.clone()),
            Some(self.customer_name.clone()),
            StatusFilter::from_code_or_all(&self.status),
        )
    }
}

/// Commits filter form actions to the URL.
#[derive(Debug, Clone, Copy)]
pub struct OrderFilterController<S> {
    sync: UrlSynchronizer<S>,
}

impl<S: QueryStore> OrderFilterController<S> {
    pub fn new(store: S) -> Self {
        Self {
            sync: UrlSynchronizer::new(store),
        }
    }

    pub fn initialize(&self) -> FormState {
        FormState::initialize(&self.sync.read())
    }

    /// "Filtrar resultados"
    pub fn apply(&self, form: &FormState) -> FilterState {
        let filters = form.submit();
        log::info!(
            "apply order filters: id={:?} customer={:?} status={}",
            filters.order_id,
            filters.customer_name,
            filters.status.code()
        );
        self.sync.write(&filters);
        filters
    }

    /// "Remover filtros"
    pub fn clear(&self) -> (FormState, FilterState) {
        log::info!("clear order filters");
        let filters = FilterState::default();
        self.sync.write(&filters);
        (FormState::default(), filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_store::MemoryQueryStore;
    use contracts::domain::orders::OrderStatus;

    #[test]
    fn test_initialize_defaults() {
        let controller = OrderFilterController::new(MemoryQueryStore::new(""));
        assert_eq!(controller.initialize(), FormState::default());
        assert_eq!(FormState::default().status, "all");
    }

    #[test]
    fn test_initialize_from_url() {
        let controller = OrderFilterController::new(MemoryQueryStore::new(
            "?customerName=Ana&status=delivering",
        ));
        let form = controller.initialize();
        assert_eq!(form.order_id, "");
        assert_eq!(form.customer_name, "Ana");
        assert_eq!(form.status, "delivering");
    }

    #[test]
    fn test_field_change_does_not_commit() {
        let store = MemoryQueryStore::new("");
        let controller = OrderFilterController::new(store.clone());
        let mut form = controller.initialize();

        form.on_field_change(FilterField::OrderId, "77".to_string());
        form.on_field_change(FilterField::Status, "canceled".to_string());

        assert_eq!(form.value(FilterField::OrderId), "77");
        assert_eq!(store.search(), "");
        assert_eq!(store.replacements(), 0);
    }

    #[test]
    fn test_submit_trims_customer_name() {
        let store = MemoryQueryStore::new("");
        let controller = OrderFilterController::new(store.clone());
        let mut form = FormState::default();
        form.on_field_change(FilterField::CustomerName, "  Maria  ".to_string());

        let committed = controller.apply(&form);

        assert_eq!(committed.customer_name.as_deref(), Some("Maria"));
        assert_eq!(UrlSynchronizer::new(store.clone()).read(), committed);
        assert_eq!(store.search(), "?customerName=Maria");
    }

    #[test]
    fn test_submit_coerces_unknown_status() {
        let mut form = FormState::default();
        form.on_field_change(FilterField::Status, "archived".to_string());
        assert_eq!(form.submit().status, StatusFilter::All);

        form.on_field_change(FilterField::Status, "processing".to_string());
        assert_eq!(
            form.submit().status,
            StatusFilter::Only(OrderStatus::Processing)
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let store = MemoryQueryStore::new("?orderId=9&customerName=Ana&status=pending&pageIndex=3");
        let controller = OrderFilterController::new(store.clone());

        let (form, filters) = controller.clear();

        assert_eq!(form, FormState::default());
        assert_eq!(filters, FilterState::default());
        assert_eq!(UrlSynchronizer::new(store.clone()).read(), FilterState::default());
        assert_eq!(store.search(), "?pageIndex=3");
    }

    #[test]
    fn test_clear_after_apply() {
        let store = MemoryQueryStore::new("");
        let controller = OrderFilterController::new(store.clone());
        let mut form = FormState::default();
        form.on_field_change(FilterField::OrderId, "abc".to_string());
        form.on_field_change(FilterField::Status, "delivered".to_string());
        controller.apply(&form);
        assert_eq!(store.search(), "?orderId=abc&status=delivered");

        controller.clear();
        assert_eq!(store.search(), "");
    }
}
