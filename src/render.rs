//! ページ内容・解析結果のテキスト描画

use ks_detect_common::{
    confidence_percent, format_size_mb, AnalysisResult, ImageFile, PageContent, SectionBody,
};
use std::fmt::Write;

pub fn render_page(page: &PageContent) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}", "=".repeat(page.title.chars().count()));
    let _ = writeln!(out, "{}\n", page.subtitle);

    for alert in &page.alerts {
        let _ = writeln!(out, "⚠ {}\n", alert);
    }

    for section in &page.sections {
        let _ = writeln!(out, "## {}\n", section.heading);
        for body in &section.body {
            match body {
                SectionBody::Paragraph(text) => {
                    let _ = writeln!(out, "{}\n", text);
                }
                SectionBody::Subheading(text) => {
                    let _ = writeln!(out, "### {}", text);
                }
                SectionBody::Bullets(items) => {
                    for item in items {
                        let _ = writeln!(out, "  • {}", item);
                    }
                    out.push('\n');
                }
                SectionBody::Cards(cards) => {
                    for (heading, text) in cards {
                        let _ = writeln!(out, "[{}]\n  {}", heading, text);
                    }
                    out.push('\n');
                }
                SectionBody::Alert(text) => {
                    let _ = writeln!(out, "ℹ {}\n", text);
                }
            }
        }
    }

    for action in &page.actions {
        let _ = writeln!(out, "→ {} (ks-detect page {})", action.label, action.target.path().trim_start_matches('/'));
    }

    out
}

/// 選択画像の一行表示（"lesion.jpg • 2.0MB"）
pub fn render_image_line(image: &ImageFile) -> String {
    format!("{} • {}", image.name, format_size_mb(image.size()))
}

pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Result");
    let _ = writeln!(out, "  {}", result.prediction);
    let _ = writeln!(out, "  Confidence: {}%", confidence_percent(result.confidence));

    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations");
        for rec in &result.recommendations {
            let _ = writeln!(out, "  • {}", rec);
        }
    }

    out
}
