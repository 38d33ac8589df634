//! KSの解説ページ

use crate::components::page_view::PageView;
use ks_detect_common::content;
use leptos::prelude::*;

#[component]
pub fn LearnPage() -> impl IntoView {
    view! { <PageView page=content::learn() /> }
}
