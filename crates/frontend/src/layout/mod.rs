pub mod global_context;
pub mod sidebar;
pub mod top_header;

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::w001_inventory_item::ui::InventoryList;
use crate::domain::w002_order::ui::OrderList;
use crate::shared::toast::ToastHost;
use global_context::{use_app_context, Page};
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Sidebar />

                <main class="app-main">
                    {move || match ctx.active.get() {
                        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                        Page::Inventory => view! { <InventoryList /> }.into_any(),
                        Page::Orders => view! { <OrderList /> }.into_any(),
                    }}
                </main>
            </div>

            <ToastHost />
        </div>
    }
}
