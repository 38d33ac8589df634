//! プログレスバーコンポーネント
//!
//! デモ解析は進捗を返さないため固定値で表示する

use leptos::prelude::*;

const INDICATIVE_PROGRESS: u32 = 33;

#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=format!("width: {}%", INDICATIVE_PROGRESS)
                />
            </div>
            <p class="progress-text">"Analyzing image with AI model..."</p>
        </div>
    }
}
