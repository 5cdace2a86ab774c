pub mod state;

pub use state::{create_state, OrderExplorerState};

use crate::config::{default_config, ExplorerConfig};
use crate::domain::a001_order::mock_data::demo_orders;
use crate::domain::a001_order::presenter::{
    page_buttons, present_page, range_label, tab_label, DisplayRecord,
};
use crate::domain::a001_order::store::StoreError;
use crate::domain::a001_order::view_state::ViewMode;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::{Badge, BadgeTone};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches, SearchInput};
use contracts::domain::a001_order::OrderId;
use contracts::enums::{OrderStatus, OrderType};
use contracts::shared::order_query::{Facet, OrderTab, QueryPatch, SortField};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Имитация задержки внешнего источника
const DEMO_LOAD_DELAY_MS: u32 = 250;

/// Запросить набор заказов у источника и применить его по номеру загрузки
fn reload(state: OrderExplorerState) {
    let Some(ticket) = state.store.try_update(|s| s.begin_load()) else {
        return;
    };
    state.loading.set(true);
    state.error.set(None);

    spawn_local(async move {
        TimeoutFuture::new(DEMO_LOAD_DELAY_MS).await;
        let Some((outcome, latest)) = state.store.try_update(|s| {
            let outcome = s.apply_load(ticket, demo_orders());
            (outcome, s.is_latest_load(ticket))
        }) else {
            return;
        };

        match outcome {
            Ok(()) => {
                log::info!("Orders loaded (load #{})", ticket.value());
            }
            Err(StoreError::StaleLoad { .. }) => {
                log::debug!("Load #{} superseded by a newer one", ticket.value());
            }
            Err(e) => {
                log::error!("Failed to load orders: {}", e);
                state.error.set(Some(e.to_string()));
            }
        }

        // Более новая загрузка ещё в пути
        if latest {
            state.loading.set(false);
        }
    });
}

#[component]
fn SortHeader(label: &'static str, field: SortField, state: OrderExplorerState) -> impl IntoView {
    let sort = Memo::new(move |_| state.store.with(|s| s.query().sort));

    view! {
        <div
            class="sortable-header"
            on:click=move |_| state.store.update(|s| {
                s.toggle_sort(field);
            })
        >
            {label}
            {move || {
                let sort = sort.get();
                get_sort_indicator(sort.field, field, sort.direction)
            }}
        </div>
    }
}

/// Меню действий строки: открыто не больше одного
fn row_menu(state: OrderExplorerState, id: OrderId) -> impl IntoView {
    let id_for_toggle = id.clone();

    view! {
        <div class="row-menu">
            <button
                class="row-menu__trigger"
                title="Ações"
                on:click=move |_| state.view.update(|v| {
                    v.toggle_row_menu(&id_for_toggle);
                })
            >
                {icon("more-vertical")}
            </button>
            {move || {
                if state.view.with(|v| v.is_menu_open(&id)) {
                    let id_for_select = id.clone();
                    let selected = state.view.with(|v| v.is_selected(&id));
                    view! {
                        <div class="row-menu__dropdown">
                            <button
                                class="row-menu__item"
                                on:click=move |_| state.view.update(|v| {
                                    v.toggle_selection(&id_for_select);
                                    v.close_row_menu();
                                })
                            >
                                {if selected { "Desmarcar pedido" } else { "Selecionar pedido" }}
                            </button>
                            <button
                                class="row-menu__item"
                                on:click=move |_| state.view.update(|v| v.close_row_menu())
                            >
                                "Fechar"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

fn selection_checkbox(state: OrderExplorerState, id: OrderId) -> impl IntoView {
    let id_for_toggle = id.clone();
    view! {
        <input
            type="checkbox"
            prop:checked=move || state.view.with(|v| v.is_selected(&id))
            on:change=move |_| state.view.update(|v| {
                v.toggle_selection(&id_for_toggle);
            })
        />
    }
}

fn render_table(rows: Vec<DisplayRecord>, state: OrderExplorerState, search: String) -> impl IntoView {
    let page_ids: Vec<OrderId> = rows.iter().map(|row| OrderId::new(row.id.clone())).collect();
    let ids_for_checked = page_ids.clone();

    let body = rows
        .into_iter()
        .map(|row| {
            let id = OrderId::new(row.id.clone());
            let checkbox = selection_checkbox(state, id.clone());
            let menu = row_menu(state, id);
            let id_view = highlight_matches(&row.id, &search);
            let customer = highlight_matches(&row.customer_name, &search);
            let product = highlight_matches(&row.product, &search);
            let DisplayRecord {
                order_date,
                status,
                payment,
                gross_value,
                margin,
                margin_negative,
                type_code,
                region_code,
                ..
            } = row;
            let margin_class = if margin_negative { "text-right text-error" } else { "text-right" };

            view! {
                <TableRow>
                    <TableCell>{checkbox}</TableCell>
                    <TableCell>
                        <TableCellLayout>{id_view}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{customer}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{product}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{order_date}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <Badge tone=status.tone>{status.label}</Badge>
                    </TableCell>
                    <TableCell>
                        <Badge tone=payment.tone>{payment.label}</Badge>
                    </TableCell>
                    <TableCell class="text-right">{gross_value}</TableCell>
                    <TableCell class=margin_class>{margin}</TableCell>
                    <TableCell>{type_code}</TableCell>
                    <TableCell>{region_code}</TableCell>
                    <TableCell>{menu}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>
                        <input
                            type="checkbox"
                            title="Selecionar página"
                            prop:checked=move || state.view.with(|v| v.is_page_selected(&ids_for_checked))
                            on:change=move |_| state.view.update(|v| {
                                v.toggle_page_selection(&page_ids);
                            })
                        />
                    </TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Pedido" field=SortField::Id state=state /></TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Cliente" field=SortField::CustomerName state=state /></TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Produto" field=SortField::ProductName state=state /></TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Data" field=SortField::OrderDate state=state /></TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Status" field=SortField::Status state=state /></TableHeaderCell>
                    <TableHeaderCell>"Pagamento"</TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Valor" field=SortField::GrossValue state=state /></TableHeaderCell>
                    <TableHeaderCell><SortHeader label="Margem" field=SortField::Margin state=state /></TableHeaderCell>
                    <TableHeaderCell>"Tipo"</TableHeaderCell>
                    <TableHeaderCell>"UF"</TableHeaderCell>
                    <TableHeaderCell>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>{body}</TableBody>
        </Table>
    }
}

fn render_grid(rows: Vec<DisplayRecord>, state: OrderExplorerState, search: String) -> impl IntoView {
    let cards = rows
        .into_iter()
        .map(|row| {
            let id = OrderId::new(row.id.clone());
            let id_for_class = id.clone();
            let checkbox = selection_checkbox(state, id.clone());
            let menu = row_menu(state, id);
            let id_view = highlight_matches(&row.id, &search);
            let customer = highlight_matches(&row.customer_name, &search);
            let product = highlight_matches(&row.product, &search);
            let DisplayRecord {
                order_date,
                status,
                payment,
                gross_value,
                type_code,
                region_code,
                ..
            } = row;

            view! {
                <div class=move || if state.view.with(|v| v.is_selected(&id_for_class)) {
                    "order-card order-card--selected"
                } else {
                    "order-card"
                }>
                    <div class="order-card__header">
                        {checkbox}
                        <span class="order-card__id">"#"{id_view}</span>
                        {menu}
                    </div>
                    <div class="order-card__customer">{customer}</div>
                    <div class="order-card__product">{product}</div>
                    <div class="order-card__badges">
                        <Badge tone=status.tone>{status.label}</Badge>
                        <Badge tone=payment.tone>{payment.label}</Badge>
                        <span class="order-card__type">{format!("{} · {}", type_code, region_code)}</span>
                    </div>
                    <div class="order-card__footer">
                        <span>{order_date}</span>
                        <span class="order-card__value">{gross_value}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="order-grid">{cards}</div> }
}

/// Обозреватель заказов: вкладки, фильтры, поиск, пагинация, список или сетка
#[component]
pub fn OrderExplorer() -> impl IntoView {
    let config = use_context::<ExplorerConfig>().unwrap_or_else(|| default_config().clone());
    let state = create_state(&config);
    let max_page_buttons = config.list.max_page_buttons;

    reload(state);

    let result = Memo::new(move |_| state.store.with(|s| s.result().clone()));
    let query = Memo::new(move |_| state.store.with(|s| s.query().clone()));
    let summary = Memo::new(move |_| state.store.with(|s| s.summary()));
    let mode = Memo::new(move |_| state.view.with(|v| v.mode()));
    let search_text = Memo::new(move |_| query.with(|q| q.search_text.clone()));

    let rows = Memo::new(move |_| {
        result.with(|page| present_page(&page.items)).map_err(|e| {
            log::error!("Failed to present orders: {}", e);
            e.to_string()
        })
    });

    // Известные типы плюс новые коды, пришедшие с данными
    let type_options = Memo::new(move |_| {
        let mut types = OrderType::all();
        result.with(|page| {
            for order_type in page.type_counts.keys() {
                if !types.contains(order_type) {
                    types.push(order_type.clone());
                }
            }
        });
        types
    });

    let apply = move |patch: QueryPatch| {
        state.store.update(|s| {
            s.set_query(patch);
        });
    };

    view! {
        <div class="order-explorer">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pedidos"</h1>
                    <Show when=move || state.loading.get()>
                        <span class="page__hint">"Carregando..."</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| state.store.update(|s| {
                            s.reset_filters();
                        })
                    >
                        "Limpar filtros"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload(state)
                    >
                        "Recarregar"
                    </Button>
                </div>
            </div>

            <div class="stat-cards">
                <StatCard
                    label="Total de pedidos"
                    icon_name="orders"
                    value=Signal::derive(move || summary.with(|s| s.total))
                />
                <StatCard
                    label="Pendentes"
                    icon_name="clock"
                    value=Signal::derive(move || summary.with(|s| s.status_count(&OrderStatus::Pending)))
                    tone=BadgeTone::Warning
                />
                <StatCard
                    label="Completos"
                    icon_name="check"
                    value=Signal::derive(move || summary.with(|s| s.status_count(&OrderStatus::Completed)))
                    tone=BadgeTone::Success
                />
                <StatCard
                    label="Pagos"
                    icon_name="payments"
                    value=Signal::derive(move || summary.with(|s| s.paid))
                    tone=BadgeTone::Primary
                />
            </div>

            {move || state.error.get().map(|err| view! {
                <div class="error-message">{err}</div>
            })}

            <div class="tabs">
                {OrderTab::all().into_iter().map(|tab| view! {
                    <button
                        class=move || if query.with(|q| q.active_tab == tab) { "tab tab--active" } else { "tab" }
                        on:click=move |_| apply(QueryPatch::default().tab(tab))
                    >
                        {tab_label(tab)}
                        <span class="tab__count">{move || result.with(|page| page.tab_count(tab))}</span>
                    </button>
                }).collect_view()}
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || search_text.get())
                    on_change=Callback::new(move |text: String| apply(QueryPatch::default().search(text)))
                    debounce_ms=config.list.search_debounce_ms
                />

                <select
                    class="form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let filter = if value.is_empty() {
                            Facet::All
                        } else {
                            Facet::Only(OrderType::from_code(&value))
                        };
                        apply(QueryPatch::default().type_filter(filter));
                    }
                >
                    <option value="" selected=move || query.with(|q| q.type_filter.is_all())>
                        "Todos os tipos"
                    </option>
                    <For
                        each=move || type_options.get()
                        key=|order_type| order_type.code().to_string()
                        children=move |order_type| {
                            let code = order_type.code().to_string();
                            let label_code = code.clone();
                            let for_selected = order_type.clone();
                            view! {
                                <option
                                    value=code
                                    selected=move || query.with(|q| q.type_filter == Facet::Only(for_selected.clone()))
                                >
                                    {move || {
                                        let count = result.with(|page| {
                                            page.type_counts.get(&order_type).copied().unwrap_or(0)
                                        });
                                        format!("{} ({})", label_code, count)
                                    }}
                                </option>
                            }
                        }
                    />
                </select>

                <select
                    class="form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let filter = if value.is_empty() {
                            Facet::All
                        } else {
                            Facet::Only(OrderStatus::parse(&value))
                        };
                        apply(QueryPatch::default().status_filter(filter));
                    }
                >
                    <option value="" selected=move || query.with(|q| q.status_filter.is_all())>
                        "Todos os status"
                    </option>
                    {OrderStatus::all().into_iter().map(|status| {
                        let code = status.code().to_string();
                        let label = status.display_name().unwrap_or_default();
                        view! {
                            <option
                                value=code
                                selected=move || query.with(|q| q.status_filter == Facet::Only(status.clone()))
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <div class="view-toggle">
                    <button
                        class=move || if mode.get() == ViewMode::List { "view-toggle__btn view-toggle__btn--active" } else { "view-toggle__btn" }
                        title="Lista"
                        on:click=move |_| state.view.update(|v| v.set_mode(ViewMode::List))
                    >
                        {icon("list")}
                    </button>
                    <button
                        class=move || if mode.get() == ViewMode::Grid { "view-toggle__btn view-toggle__btn--active" } else { "view-toggle__btn" }
                        title="Grade"
                        on:click=move |_| state.view.update(|v| v.set_mode(ViewMode::Grid))
                    >
                        {icon("grid")}
                    </button>
                </div>
            </div>

            {move || {
                let count = state.view.with(|v| v.selected_count());
                if count > 0 {
                    view! {
                        <div class="selection-bar">
                            <span>{format!("{} selecionado(s)", count)}</span>
                            <button
                                class="selection-bar__clear"
                                on:click=move |_| state.view.update(|v| v.clear_selection())
                            >
                                "Limpar seleção"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="order-explorer__content">
                {move || match rows.get() {
                    Err(err) => view! {
                        <div class="error-message">{err}</div>
                    }
                    .into_any(),
                    Ok(rows) if rows.is_empty() => view! {
                        <div class="empty-state">"Nenhum pedido encontrado"</div>
                    }
                    .into_any(),
                    Ok(rows) => match mode.get() {
                        ViewMode::List => render_table(rows, state, search_text.get()).into_any(),
                        ViewMode::Grid => render_grid(rows, state, search_text.get()).into_any(),
                    },
                }}
            </div>

            <div class="order-explorer__footer">
                <span class="pagination-summary">{move || result.with(range_label)}</span>
                <PaginationControls
                    current_page=Signal::derive(move || result.with(|page| page.page))
                    total_pages=Signal::derive(move || result.with(|page| page.total_pages))
                    page_buttons=Signal::derive(move || result.with(|page| page_buttons(page, max_page_buttons)))
                    on_page_change=Callback::new(move |page: usize| state.store.update(|s| {
                        s.go_to_page(page);
                    }))
                />
            </div>
        </div>
    }
}
