use super::state::create_state;
use crate::domain::w001_inventory_item::ui::form::InventoryItemForm;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{
    format_money, DataTable, FilterPanel, PaginationControls, SearchInput, TableColumn,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::state::{FormMode, WarehouseStore};
use crate::shared::toast::ToastService;
use contracts::domain::common::Record;
use contracts::domain::w001_inventory_item::{InventoryFilter, InventoryItem};
use contracts::shared::RecordFilter;
use leptos::prelude::*;

fn columns() -> Vec<TableColumn<InventoryItem>> {
    vec![
        TableColumn::new("code", "Code", |item| item.code.clone()),
        TableColumn::new("name", "Name", |item| item.name.clone()),
        TableColumn::new("category", "Category", |item| item.category.clone()),
        TableColumn::right("quantity", "Quantity", |item| item.quantity.to_string()),
        TableColumn::right("unit_price", "Unit price", |item| {
            format_money(item.unit_price)
        }),
        TableColumn::new("supplier", "Supplier", |item| item.supplier.clone()),
        TableColumn::new("last_updated", "Last updated", |item| {
            format_date(item.last_updated)
        }),
    ]
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let store = WarehouseStore::use_store();
    let toasts = ToastService::use_toasts();
    let inventory = store.inventory;

    let state = create_state();
    let form: RwSignal<FormMode<InventoryItem>> = RwSignal::new(FormMode::Closed);
    let filter_expanded = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let s = state.get();
        inventory.get().page(s.page, s.page_size)
    });
    let visible_count = Memo::new(move |_| inventory.get().visible_len());
    let total_pages = Memo::new(move |_| {
        let size = state.get().page_size;
        inventory.get().total_pages(size)
    });
    let sort = Memo::new(move |_| inventory.get().sort_spec().cloned());
    let active_filters = Memo::new(move |_| inventory.get().filter().active_count());
    let query = Memo::new(move |_| inventory.get().filter().q.clone());

    // Deletions and filter changes can leave the page past the end
    Effect::new(move |_| {
        let total = total_pages.get();
        let page = state.get_untracked().page;
        if total > 0 && page > total {
            state.update(|s| s.page = total);
        }
    });

    let categories = Memo::new(move |_| {
        let mut cats: Vec<String> = inventory
            .get()
            .all()
            .iter()
            .map(|item| item.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    });

    // Rebuild the filter from the raw inputs, preserving the search query
    let apply_filter = move || {
        let q = inventory.with_untracked(|set| set.filter().q.clone());
        let filter = state.get_untracked().build_filter(q);
        inventory.update(|set| set.set_filter(filter));
        state.update(|s| s.page = 1);
    };

    let on_sort = Callback::new(move |field: String| {
        inventory.update(|set| set.toggle_sort(&field));
    });

    let on_search = Callback::new(move |q: String| {
        inventory.update(|set| {
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
            s.category = String::new();
            s.supplier = String::new();
            s.price_min = String::new();
            s.price_max = String::new();
            s.page = 1;
        });
        inventory.update(|set| set.set_filter(InventoryFilter::default()));
    });

    let actions = Callback::new(move |item: InventoryItem| {
        let edit_target = item.clone();
        let edit = Callback::new(move |_| {
            form.set(FormMode::Editing(edit_target.clone()));
        });
        let delete = Callback::new(move |_| {
            let message = format!("Delete {} ({})?", item.name, item.code);
            let confirmed = window().confirm_with_message(&message).unwrap_or(false);
            if !confirmed {
                return;
            }
            match store.delete_item(item.id) {
                Ok(removed) => toasts.success(format!("Deleted {}", removed.name)),
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
                    {InventoryItem::list_name()}
                    <span class="list-page__count">{move || visible_count.get()}</span>
                </h2>
                <div class="list-page__tools">
                    <SearchInput
                        value=Signal::derive(move || query.get())
                        placeholder="Search by name..."
                        on_search=on_search
                    />
                    <Button on_click=Callback::new(move |_| form.set(FormMode::Adding))>
                        {icon("plus")}
                        " Add item"
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
                                label="Category"
                                value=Signal::derive(move || state.get().category)
                                options=Signal::derive(move || {
                                    let mut opts = vec![(String::new(), "All categories".to_string())];
                                    opts.extend(
                                        categories.get().into_iter().map(|c| (c.clone(), c)),
                                    );
                                    opts
                                })
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| s.category = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Supplier"
                                value=Signal::derive(move || state.get().supplier)
                                placeholder="Any supplier"
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.supplier = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Min price"
                                input_type="number"
                                value=Signal::derive(move || state.get().price_min)
                                placeholder="0"
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.price_min = value);
                                    apply_filter();
                                })
                            />
                            <Input
                                label="Max price"
                                input_type="number"
                                value=Signal::derive(move || state.get().price_max)
                                placeholder="No limit"
                                on_input=Callback::new(move |value: String| {
                                    state.update(|s| s.price_max = value);
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
                row_class=|item: &InventoryItem| {
                    if item.is_low_stock() {
                        "data-table__row--warning"
                    } else {
                        ""
                    }
                }
                actions=actions
            />

            <InventoryItemForm form=form />
        </div>
    }
}
