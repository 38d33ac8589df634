//! ツール画面相当の一連の処理（選択 → 解析 → 結果）

use crate::error::{KsDetectError, Result};
use crate::loader::{inspect_image, load_image};
use crate::preview::ThumbnailPreviewFactory;
use indicatif::{ProgressBar, ProgressStyle};
use ks_detect_common::{AnalysisResult, AnalysisService, ImageFile, Notifier, StartOutcome, ToolSession};
use std::path::Path;
use std::time::Duration;

pub type CliSession<A, N> = ToolSession<A, N, ThumbnailPreviewFactory>;

/// 画像を読み込む
///
/// 形式とサイズを先に検証し、通らないファイルは内容を読まない
pub fn load_checked<A, N>(session: &CliSession<A, N>, path: &Path) -> Result<ImageFile>
where
    A: AnalysisService,
    N: Notifier,
{
    let (media_type, size) = inspect_image(path)?;
    session.precheck(&media_type, size)?;
    load_image(path)
}

/// 画像を選択して解析し、結果を返す
///
/// 選択・解析の失敗は通知済みのため、ここではエラーとして返すだけ。
/// 終了時はセッションをリセットしてプレビューを解放する。
pub async fn run_analysis<A, N>(
    session: &CliSession<A, N>,
    file: ImageFile,
    save_preview: Option<&Path>,
    show_spinner: bool,
) -> Result<AnalysisResult>
where
    A: AnalysisService,
    N: Notifier,
{
    let outcome = analyze_selected(session, file, save_preview, show_spinner).await;
    session.reset();
    outcome
}

async fn analyze_selected<A, N>(
    session: &CliSession<A, N>,
    file: ImageFile,
    save_preview: Option<&Path>,
    show_spinner: bool,
) -> Result<AnalysisResult>
where
    A: AnalysisService,
    N: Notifier,
{
    session.select_image(file)?;

    if let (Some(dest), Some(preview)) = (save_preview, session.preview_url()) {
        std::fs::copy(&preview, dest)?;
    }

    let spinner = if show_spinner { spinner() } else { ProgressBar::hidden() };
    let outcome = session.start_analysis().await;
    spinner.finish_and_clear();

    match outcome {
        StartOutcome::Stored => session.result().ok_or(KsDetectError::AnalysisFailed),
        _ => Err(KsDetectError::AnalysisFailed),
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Analyzing image with AI model...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
