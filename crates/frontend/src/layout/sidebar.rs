use super::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav
            class="sidebar"
            class=("sidebar--collapsed", move || !ctx.sidebar_open.get())
        >
            <ul class="sidebar__list">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class=("sidebar__item--active", move || ctx.active.get() == page)
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(page.icon_name())}
                                    <span class="sidebar__label">{page.title()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
