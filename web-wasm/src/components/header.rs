//! ヘッダーコンポーネント（ナビゲーション）

use ks_detect_common::Route;
use leptos::prelude::*;

#[component]
pub fn Header(route: ReadSignal<Route>) -> impl IntoView {
    view! {
        <header class="header">
            <a class="brand" href=Route::Landing.href()>"KS Detect"</a>
            <nav class="nav">
                {Route::ALL
                    .into_iter()
                    .map(|r| {
                        view! {
                            <a
                                href=r.href()
                                class=move || if route.get() == r { "nav-link active" } else { "nav-link" }
                            >
                                {r.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
