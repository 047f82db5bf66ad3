use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Debounced search box. Keystrokes update the box immediately but
/// `on_search` only fires after the input has been idle for 300ms, so
/// the visible collection is not recomputed on every character. The
/// clear button fires immediately.
#[component]
pub fn SearchInput(
    /// Current query value
    #[prop(into)]
    value: Signal<String>,

    /// Placeholder text
    #[prop(into)]
    placeholder: String,

    /// Called with the new query after the debounce window
    on_search: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    // Generation counter: a newer keystroke invalidates pending timers.
    let generation: StoredValue<u64> = StoredValue::new(0);

    // Follow external query changes (filter reset) so the box never
    // shows a term that is no longer active. An in-flight debounce
    // for the old text is invalidated at the same time.
    Effect::new(move |_| {
        let current = value.get();
        if draft.get_untracked() != current {
            generation.update_value(|g| *g += 1);
            draft.set(current);
        }
    });

    let schedule = move |text: String| {
        let my_gen = generation.with_value(|g| g + 1);
        generation.set_value(my_gen);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.with_value(|g| *g) == my_gen {
                on_search.run(text);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        draft.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    draft.set(text.clone());
                    schedule(text);
                }
            />
            {move || {
                if draft.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button class="search-input__clear" on:click=clear title="Clear search">
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
