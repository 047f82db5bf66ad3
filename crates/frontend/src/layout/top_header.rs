use super::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__brand">"Warehouse"</span>
            </div>
            <div class="top-header__right">
                <ThemeToggle />
            </div>
        </header>
    }
}
