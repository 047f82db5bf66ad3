use super::state::create_state;
use crate::domain::w002_order::ui::form::OrderForm;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{
    format_money, DataTable, FilterPanel, PaginationControls, SearchInput, TableColumn,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::state::{FormMode, WarehouseStore};
use crate::shared::toast::ToastService;
use contracts::domain::common::Record;
use contracts::domain::w002_order::{Order, OrderFilter};
use contracts::shared::RecordFilter;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<Order>> {
    vec![
        TableColumn::new("code", "Order", |order| order.code.clone()),
        TableColumn::new("customer_name", "Customer", |order| {
            order.customer_name.clone()
        }),
        TableColumn::new("status", "Status", |order| {
            order.status.display_name().to_string()
        }),
        TableColumn::right("items", "Units", |order| order.unit_count().to_string()),
        TableColumn::right("total_price", "Total", |order| {
            format_money(order.total_price)
        }),
        TableColumn::new("created_at", "Created", |order| {
            format_date(order.created_at)
        }),
        TableColumn::new("shipping_date", "Shipping", |order| {
            format_date(order.shipping_date)
        }),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let store = WarehouseStore::use_store();
    let toasts = ToastService::use_toasts();
    let orders = store.orders;

    let state = create_state();
    let form: RwSignal<FormMode<Order>> = RwSignal::new(FormMode::Closed);
    let filter_expanded = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let s = state.get();
        orders.get().page(s.page, s.page_size)
    });
    let visible_count = Memo::new(move |_| orders.get().visible_len());
    let total_pages = Memo::new(move |_| {
        let size = state.get().page_size;
        orders.get().total_pages(size)
    });
    let sort = Memo::new(move |_| orders.get().sort_spec().cloned());
    let active_filters = Memo::new(move |_| orders.get().filter().active_count());
    let query = Memo::new(move |_| orders.get().filter().q.clone());

    Effect::new(move |_| {
        let total = total_pages.get();
        let page = state.get_untracked().page;
        if total > 0 && page > total {
            state.update(|s| s.page = total);
        }
    });

    let apply_filter = move || {
        let q = orders.with_untracked(|set| set.filter().q.clone());
        let filter = state.get_untracked().build_filter(q);
        orders.update(|set| set.set_filter(filter));
        state.update(|s| s.page = 1);
    };

    let on_sort = Callback::new(move |field: String| {
        orders.update(|set| set.toggle_sort(&field));
    });

    let on_search = Callback::new(move |q: String| {
        orders.update(|set| {
            let mut filter = set.filter().clone();
            filter.q = q;
            set.set_filter(filter);
        });
        state.update(|s| s.page = 1);
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
    });

    let reset_filters = Callback::new(move |_| {
        state.update(|s| {
            s.status = String::new();
            s.price_min = String::new();
            s.price_max = String::new();
            s.date_from = String::new();
            s.date_to = String::new();
            s.page = 1;
        });
        orders.update(|set| set.set_filter(OrderFilter::default()));
    });

    let actions = Callback::new(move |order: Order| {
        let edit_target = order.clone();
        let edit = Callback::new(move |_| {
            form.set(FormMode::Editing(edit_target.clone()));
        });
        let delete = Callback::new(move |_| {
            let message = format!("Delete order {} for {}?", order.code, order.customer_name);
            let confirmed = window().confirm_with_message(&message).unwrap_or(false);
            if !confirmed {
                return;
            }
            match store.delete_order(order.id) {
                Ok(removed) => toasts.success(format!("Deleted {}", removed.code)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
        view! {
            <Button variant="ghost" size="sm" on_click=edit>
                {icon("edit")}
            </Button>
            <Button variant="danger" size="sm" on_click=delete>
                {icon("trash")}
            </Button>
        }
        .into_any()
    });

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h2 class="list-page__title">
                    {Order::list_name()}
                    <span class="list-page__count">{move || visible_count.get()}</span>
                </h2>
                <div class="list-page__tools">
                    <SearchInput
                        value=Signal::derive(move || query.get())
                        placeholder="Search by customer..."
                        on_search=on_search
                    />
                    <Button on_click=Callback::new(move |_| form.set(FormMode::Adding))>
                        {icon("plus")}
                        " Add order"
                    </Button>
                </div>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || active_filters.get())
                pagination_controls=move || {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || total_pages.get())
                            total_count=Signal::derive(move || visible_count.get())
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=on_page_change
                            on_page_size_change=on_page_size_change
                        />
                    }
                }
                filter_content=move || {
                    view! {
                        <div class="filter-row">
                            <Select
                                label="Status"
                                value=Signal::derive(move || state.get().status)
                                options=Signal::derive(move || {
                                    let mut opts = vec![(String::new(), "Any status".to_string())];
                                    opts.extend(OrderStatus::all().into_iter().map(|status| {
                                        (status.code().to_string(), status.display_name().to_string())
                                    }));
                                    opts
                                })
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| s.status = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Min total"
                                input_type="number"
                                value=Signal::derive(move || state.get().price_min)
                                placeholder="0"
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.price_min = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Max total"
                                input_type="number"
                                value=Signal::derive(move || state.get().price_max)
                                placeholder="No limit"
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.price_max = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Created from"
                                input_type="date"
                                value=Signal::derive(move || state.get().date_from)
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.date_from = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Created to"
                                input_type="date"
                                value=Signal::derive(move || state.get().date_to)
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.date_to = value);
                                    apply_filter();
                                })
                            />
                            <Button variant="secondary" size="sm" on_click=reset_filters>
                                "Reset"
                            </Button>
                        </div>
                    }
                }
            />

            <DataTable
                columns=columns()
                rows=Signal::derive(move || rows.get())
                loading=Signal::derive(move || store.loading.get())
                sort=Signal::derive(move || sort.get())
                on_sort=on_sort
                actions=actions
            />

            <OrderForm form=form />
        </div>
    }
}
