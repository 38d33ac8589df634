//! トースト通知

use gloo::timers::callback::Timeout;
use ks_detect_common::{Notice, Notifier, Severity};
use leptos::prelude::*;

/// 自動で閉じるまでの時間（ミリ秒）
const TOAST_DURATION_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// トースト一覧へ積むNotifier
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| t.push(Toast { id, notice }));

        let this = *self;
        Timeout::new(TOAST_DURATION_MS, move || this.dismiss(id)).forget();
    }
}

#[component]
pub fn Toaster(notifier: ToastNotifier) -> impl IntoView {
    let toasts = notifier.toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notice.severity {
                        Severity::Normal => "toast",
                        Severity::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                            <button class="toast-close" on:click=move |_| notifier.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
