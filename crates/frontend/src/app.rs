use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::state::WarehouseStore;
use crate::shared::theme::provide_theme;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// How long the initial skeleton state is shown. Purely presentational:
/// the seed data is already in memory.
const INITIAL_LOAD_MS: u32 = 600;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation context, the record store, and the toast
    // service to the whole app.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_theme();

    let store = WarehouseStore::new();
    provide_context(store);

    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(INITIAL_LOAD_MS).await;
        store.finish_initial_load();
    });

    view! {
        <Shell />
    }
}
