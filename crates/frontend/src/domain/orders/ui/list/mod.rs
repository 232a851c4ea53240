pub mod state;

use self::state::{commit_filters, create_state, format_cents, read_page_index, write_page_index};
use crate::domain::orders::api::fetch_orders;
use crate::domain::orders::filters::{FilterState, UrlSynchronizer};
use crate::domain::orders::ui::filters::OrderTableFilters;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, OrderStatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::query_store::BrowserQueryStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Orders page: filter bar, paginated table.
///
/// Refetches whenever the committed filters, the page or the reload
/// counter change.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = use_context::<BrowserQueryStore>().unwrap_or_default();

    let filters = RwSignal::new(UrlSynchronizer::new(store).read());
    let page_index = RwSignal::new(read_page_index(&store));
    let reload = RwSignal::new(0u32);
    let state = create_state();

    Effect::new(move |_| {
        reload.track();
        let query = filters.with(|f| f.to_list_query(page_index.get()));

        let mut generation = 0;
        state.update(|s| generation = s.begin_request());

        spawn_local(async move {
            let result = fetch_orders(&query).await;
            if let Err(e) = &result {
                log::warn!("orders request #{} failed: {}", generation, e);
            }
            state.update(|s| {
                s.finish_request(generation, result);
            });
        });
    });

    let on_commit = Callback::new(move |committed: FilterState| {
        page_index.set(commit_filters(&store, &committed));
        filters.set(committed);
    });

    let on_page_change = Callback::new(move |page: usize| {
        write_page_index(&store, page);
        page_index.set(page);
    });

    let loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <div class="page" id="orders--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pedidos"</h1>
                    <Badge variant="primary">
                        {move || state.with(|s| s.total_count()).to_string()}
                    </Badge>
                    <Show when=move || filters.with(|f| !f.is_default())>
                        <Badge variant="neutral">
                            {move || format!("{} filtro(s) ativo(s)", filters.with(|f| f.active_count()))}
                        </Badge>
                    </Show>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.update(|n| *n += 1)
                        disabled=loading
                    >
                        {move || if loading.get() { "Carregando..." } else { "Atualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <OrderTableFilters store=store on_commit=on_commit />

                {move || {
                    state.with(|s| s.error.clone()).map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=220.0>
                                    "Identificador"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Realizado em"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    "Status"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    "Cliente"
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>
                                    "Total do pedido"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.orders.clone())
                                key=|order| order.order_id.clone()
                                children=move |order| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__mono">{order.order_id.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_datetime(&order.created_at)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <OrderStatusBadge status=order.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order.customer_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__money">{format_cents(order.total)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| !s.is_loading && s.error.is_none() && s.orders.is_empty())>
                        <div class="table__empty">"Nenhum pedido encontrado"</div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page_index.get())
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.total_count()))
                    on_page_change=on_page_change
                    disabled=loading
                />
            </div>
        </div>
    }
}
