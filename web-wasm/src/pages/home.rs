//! ランディングページ

use crate::components::page_view::PageView;
use ks_detect_common::content;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <PageView page=content::landing() /> }
}
