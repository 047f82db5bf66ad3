use crate::shared::components::{StatCard, ValueFormat};
use crate::shared::state::WarehouseStore;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use std::collections::HashSet;

/// Warehouse overview: headline counters over both collections plus the
/// order status breakdown. Everything is derived from the record sets,
/// so any create/update/delete on the other pages is reflected here
/// immediately.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let store = WarehouseStore::use_store();
    let inventory = store.inventory;
    let orders = store.orders;
    let loading = store.loading;

    let pending_orders = Memo::new(move |_| {
        orders
            .get()
            .all()
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count() as f64
    });
    let shipped_orders = Memo::new(move |_| {
        orders
            .get()
            .all()
            .iter()
            .filter(|o| o.status == OrderStatus::Shipped)
            .count() as f64
    });
    let low_stock = Memo::new(move |_| {
        inventory
            .get()
            .all()
            .iter()
            .filter(|item| item.is_low_stock())
            .count() as f64
    });
    let customers = Memo::new(move |_| {
        orders
            .get()
            .all()
            .iter()
            .map(|o| o.customer_name.to_lowercase())
            .collect::<HashSet<_>>()
            .len() as f64
    });
    let inventory_value = Memo::new(move |_| {
        inventory
            .get()
            .all()
            .iter()
            .map(|item| item.quantity as f64 * item.unit_price)
            .sum::<f64>()
    });

    let when_loaded = move |metric: Memo<f64>| {
        Signal::derive(move || (!loading.get()).then(|| metric.get()))
    };

    let status_breakdown = Memo::new(move |_| {
        let set = orders.get();
        let total = set.len().max(1);
        OrderStatus::all()
            .into_iter()
            .map(|status| {
                let count = set.all().iter().filter(|o| o.status == status).count();
                (status, count, count * 100 / total)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="dashboard">
            <div class="dashboard__cards">
                <StatCard
                    label="Pending orders"
                    icon_name="clock"
                    value=when_loaded(pending_orders)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Shipped orders"
                    icon_name="truck"
                    value=when_loaded(shipped_orders)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Low stock items"
                    icon_name="alert"
                    value=when_loaded(low_stock)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Customers"
                    icon_name="customers"
                    value=when_loaded(customers)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Inventory value"
                    icon_name="inventory"
                    value=when_loaded(inventory_value)
                    format=ValueFormat::Money
                />
            </div>

            <div class="dashboard__panel">
                <h3 class="dashboard__panel-title">"Orders by status"</h3>
                <div class="status-bars">
                    {move || {
                        status_breakdown
                            .get()
                            .into_iter()
                            .map(|(status, count, percent)| {
                                view! {
                                    <div class="status-bars__row">
                                        <span class="status-bars__label">
                                            {status.display_name()}
                                        </span>
                                        <div class="status-bars__track">
                                            <div
                                                class=format!(
                                                    "status-bars__fill status-bars__fill--{}",
                                                    status.code(),
                                                )
                                                style=format!("width: {}%", percent)
                                            ></div>
                                        </div>
                                        <span class="status-bars__count">{count}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
