//! 解析ツールページ
//!
//! 状態はToolSessionが持ち、画面は操作のたびに取るスナップショットを描画する

use crate::api::WebAnalysisService;
use crate::components::{
    page_view::{ActionLinks, PageIntro, SectionList},
    progress_bar::ProgressBar,
    result_panel::ResultPanel,
    toast::ToastNotifier,
    upload_area::{read_image_file, UploadArea},
};
use crate::preview::ObjectUrlPreviewFactory;
use ks_detect_common::{
    content, format_size_mb, AnalysisResult, Notice, Notifier, ToolSession, WorkflowState,
};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

type WebSession = ToolSession<WebAnalysisService, ToastNotifier, ObjectUrlPreviewFactory>;

/// 描画用のスナップショット
#[derive(Clone, Debug, PartialEq)]
struct ToolView {
    state: WorkflowState,
    preview_url: Option<String>,
    image_line: Option<String>,
    result: Option<AnalysisResult>,
}

impl ToolView {
    fn capture(session: &WebSession) -> Self {
        Self {
            state: session.state(),
            preview_url: session.preview_url(),
            image_line: session
                .image()
                .map(|image| format!("{} • {}", image.name, format_size_mb(image.size()))),
            result: session.result(),
        }
    }
}

#[component]
pub fn ToolPage(notifier: ToastNotifier) -> impl IntoView {
    let page = content::tool();
    let session = StoredValue::new_local(ToolSession::new(
        WebAnalysisService::from_build_env(),
        notifier,
        ObjectUrlPreviewFactory,
    ));
    let (snapshot, set_snapshot) = signal(session.with_value(ToolView::capture));
    let refresh = move |s: &WebSession| set_snapshot.set(ToolView::capture(s));

    let on_file = move |file: File| {
        let s = session.get_value();
        if s.precheck(&file.type_(), file.size() as u64).is_err() {
            return;
        }
        spawn_local(async move {
            match read_image_file(&file).await {
                Ok(image) => {
                    // 失敗時の通知はセッション側で済んでいる
                    let _ = s.select_image(image);
                }
                Err(e) => {
                    web_sys::console::warn_1(&e);
                    notifier.notify(Notice::destructive(
                        "Could not read file",
                        "Please try selecting the image again.",
                    ));
                }
            }
            refresh(&s);
        });
    };

    let on_analyze = move |_: MouseEvent| {
        let s = session.get_value();
        spawn_local(async move {
            // 先に解析を開始させ、解析中の状態を描画してから完了を待つ
            let _ = futures::join!(s.start_analysis(), async { refresh(&s) });
            refresh(&s);
        });
    };

    let on_reset = move |_: MouseEvent| {
        session.with_value(|s| {
            s.reset();
            refresh(s);
        });
    };

    let workspace = move || {
        let view_state = snapshot.get();
        if view_state.state == WorkflowState::Idle {
            return view! { <UploadArea on_file=on_file /> }.into_any();
        }

        let footer = match view_state.state {
            WorkflowState::ImageSelected => view! {
                <div class="button-row">
                    <button class="button primary" on:click=on_analyze>"Analyze Image"</button>
                    <button class="button" on:click=on_reset>"Choose Different Image"</button>
                </div>
            }
            .into_any(),
            WorkflowState::Analyzing => view! {
                <ProgressBar />
                <div class="button-row">
                    <button class="button primary" disabled=true>"Analyzing..."</button>
                </div>
            }
            .into_any(),
            _ => {
                let result = view_state.result.clone();
                view! {
                    {result.map(|result| view! { <ResultPanel result=result /> })}
                    <div class="button-row">
                        <button class="button" on:click=on_reset>"Analyze Another Image"</button>
                    </div>
                }
                .into_any()
            }
        };

        view! {
            <div class="analysis">
                <img class="preview" src=view_state.preview_url alt="Selected skin lesion" />
                <p class="text-muted">{view_state.image_line}</p>
                {footer}
            </div>
        }
        .into_any()
    };

    view! {
        <article class="page">
            <PageIntro title=page.title subtitle=page.subtitle alerts=page.alerts />
            <div class="card tool-card">{workspace}</div>
            <SectionList sections=page.sections />
            <ActionLinks actions=page.actions />
        </article>
    }
}
