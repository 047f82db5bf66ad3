//! Theme management module for the application.
//!
//! Provides a context-based theme system with dark and light themes.
//! Theme preference is persisted in localStorage.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

const STORAGE_KEY: &str = "warehouse_theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name as a string (used for the `data-theme` attribute and
    /// localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

/// Install the theme context: restore the stored preference and mirror
/// every change to `<html data-theme>` and localStorage.
pub fn provide_theme() {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default();

    let theme = RwSignal::new(stored);
    provide_context(ThemeContext { theme });

    Effect::new(move |_| {
        let current = theme.get();
        if let Some(w) = window() {
            if let Some(root) = w.document().and_then(|d| d.document_element()) {
                let _ = root.set_attribute("data-theme", current.as_str());
            }
            if let Some(storage) = w.local_storage().ok().flatten() {
                let _ = storage.set_item(STORAGE_KEY, current.as_str());
            }
        }
    });
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided in context")
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| ctx.theme.update(|t| *t = t.toggled())
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
