use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level views of the application
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Inventory,
    Orders,
}

impl Page {
    /// Key used in the URL query string
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Orders => "orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Orders => "Orders",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Orders => "orders",
        }
    }

    pub fn all() -> [Page; 3] {
        [Page::Dashboard, Page::Inventory, Page::Orders]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "inventory" => Some(Page::Inventory),
            "orders" => Some(Page::Orders),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let ctx = Self {
            active: RwSignal::new(Page::default()),
            sidebar_open: RwSignal::new(true),
        };
        ctx.init_router_integration();
        ctx
    }

    /// Pick the initial page from the `?page=` query parameter and keep
    /// the URL in sync with the active page afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
