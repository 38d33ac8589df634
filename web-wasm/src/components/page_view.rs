//! PageContentの描画

use ks_detect_common::{CallToAction, PageContent, Section, SectionBody};
use leptos::prelude::*;

#[component]
pub fn PageIntro(title: &'static str, subtitle: &'static str, alerts: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="page-intro">
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
        </div>
        {alerts
            .into_iter()
            .map(|alert| view! { <div class="alert" role="alert">{alert}</div> })
            .collect_view()}
    }
}

fn section_body(body: SectionBody) -> AnyView {
    match body {
        SectionBody::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        SectionBody::Subheading(text) => view! { <h3>{text}</h3> }.into_any(),
        SectionBody::Bullets(items) => view! {
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        }
        .into_any(),
        SectionBody::Cards(cards) => view! {
            <div class="cards">
                {cards
                    .into_iter()
                    .map(|(heading, text)| view! {
                        <div class="card">
                            <h4>{heading}</h4>
                            <p>{text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionBody::Alert(text) => view! { <div class="alert info">{text}</div> }.into_any(),
    }
}

#[component]
pub fn SectionList(sections: Vec<Section>) -> impl IntoView {
    sections
        .into_iter()
        .map(|section| {
            view! {
                <section class="section">
                    <h2>{section.heading}</h2>
                    {section.body.into_iter().map(section_body).collect_view()}
                </section>
            }
        })
        .collect_view()
}

#[component]
pub fn ActionLinks(actions: Vec<CallToAction>) -> impl IntoView {
    view! {
        <div class="actions">
            {actions
                .into_iter()
                .map(|action| view! {
                    <a class="button" href=action.target.href()>{action.label}</a>
                })
                .collect_view()}
        </div>
    }
}

/// 静的ページ全体
#[component]
pub fn PageView(page: PageContent) -> impl IntoView {
    view! {
        <article class="page">
            <PageIntro title=page.title subtitle=page.subtitle alerts=page.alerts />
            <SectionList sections=page.sections />
            <ActionLinks actions=page.actions />
        </article>
    }
}
