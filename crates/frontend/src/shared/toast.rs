use crate::shared::icons::icon;
use leptos::prelude::*;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Fire-and-forget notification service. Every store mutation reports
/// its outcome here; toasts auto-dismiss after a few seconds.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn use_toasts() -> Self {
        use_context::<ToastService>().expect("ToastService not provided in context")
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.set_value(id + 1);

        let message = message.into();
        log::info!("toast: {}", message);

        let toasts = self.toasts;
        toasts.update(|list| list.push(Toast { id, kind, message }));

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = ToastService::use_toasts();
    let toasts = service.toasts;

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.class())>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
