use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - page navigation for server-paginated lists
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Disables every button, e.g. while a page is loading
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let at_first = move || disabled.get().unwrap_or(false) || current_page.get() == 0;
    let at_last = move || disabled.get().unwrap_or(false) || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">
                {move || format!("Total de {} item(s)", total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_first
                title="Primeira página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("Página {} de {}", page + 1, total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
