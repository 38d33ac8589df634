//! メインアプリケーションコンポーネント
//!
//! ハッシュ（#/learn など）でページを切り替える

use crate::components::{
    header::Header,
    toast::{ToastNotifier, Toaster},
};
use crate::pages::{home::HomePage, learn::LearnPage, tool::ToolPage};
use ks_detect_common::Route;
use leptos::ev;
use leptos::prelude::*;

/// 現在のURLハッシュからルートを得る
fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or_default()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(current_route());
    let notifier = ToastNotifier::new();

    let handle = window_event_listener(ev::hashchange, move |_| {
        set_route.set(current_route());
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="container">
            <Header route=route />

            <main>
                {move || match route.get() {
                    Route::Landing => view! { <HomePage /> }.into_any(),
                    Route::Learn => view! { <LearnPage /> }.into_any(),
                    Route::Tool => view! { <ToolPage notifier=notifier /> }.into_any(),
                }}
            </main>

            <footer class="footer">
                <p class="text-muted">
                    "This AI tool is for educational and screening purposes only. Always consult healthcare professionals."
                </p>
            </footer>

            <Toaster notifier=notifier />
        </div>
    }
}
