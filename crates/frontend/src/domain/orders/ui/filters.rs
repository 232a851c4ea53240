use contracts::domain::orders::StatusFilter;
use leptos::prelude::*;

use crate::domain::orders::filters::{FilterField, FilterState, FormState, OrderFilterController};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::query_store::BrowserQueryStore;

/// Filter bar above the orders table.
///
/// Typing only edits the local form; `on_commit` fires on
/// "Filtrar resultados" and "Remover filtros", after the URL was updated.
#[component]
pub fn OrderTableFilters(
    /// URL the committed filters are written to
    store: BrowserQueryStore,
    /// Receives the newly committed filters
    on_commit: Callback<FilterState>,
) -> impl IntoView {
    let controller = OrderFilterController::new(store);
    let form = RwSignal::new(controller.initialize());

    let field_value =
        move |field: FilterField| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let field_input = move |field: FilterField| {
        Callback::new(move |value: String| form.update(|f| f.on_field_change(field, value)))
    };

    let status_options: Vec<(String, String)> = StatusFilter::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let committed = controller.apply(&form.get_untracked());
        // show what was actually applied (trimmed, coerced)
        form.set(FormState::initialize(&committed));
        on_commit.run(committed);
    };

    let on_clear = Callback::new(move |_: leptos::ev::MouseEvent| {
        let (fresh, committed) = controller.clear();
        form.set(fresh);
        on_commit.run(committed);
    });

    view! {
        <form class="order-filters" on:submit=on_submit>
            <span class="order-filters__title">"Filtros"</span>
            <Input
                value=field_value(FilterField::OrderId)
                on_input=field_input(FilterField::OrderId)
                placeholder="Id do pedido"
                class="form__input--sm"
            />
            <Input
                value=field_value(FilterField::CustomerName)
                on_input=field_input(FilterField::CustomerName)
                placeholder="Nome do Cliente"
                class="form__input--sm form__input--wide"
            />
            <Select
                value=field_value(FilterField::Status)
                on_change=field_input(FilterField::Status)
                options=status_options
                class="form__select--sm"
            />
            <Button variant="secondary" size="xs" button_type="submit">
                {icon("search")}
                " Filtrar resultados"
            </Button>
            <Button variant="outline" size="xs" on_click=on_clear>
                {icon("x")}
                " Remover filtros"
            </Button>
        </form>
    }
}
