use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel with an active-filter badge and a slot for
/// pagination controls in the header.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls (header slot)
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
        </div>
    }
}
