use crate::shared::icons::icon;
use leptos::prelude::*;

/// Modal window component. Visibility is decided by the caller (render
/// it inside a `match` on the form state); clicking the overlay or the
/// close button fires `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-content"
                on:click=|e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button
                        class="modal-close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
