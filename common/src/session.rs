//! ツール画面のセッション
//!
//! ワークフローに解析サービス・通知先・プレビュー生成を注入して操作する。
//! シングルスレッド前提（Rc/RefCell）。解析の await 中は借用を保持しない。

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use crate::error::{Error, Result};
use crate::notify::{Notice, Notifier};
use crate::preview::{Preview, PreviewFactory};
use crate::service::AnalysisService;
use crate::types::{AnalysisResult, ImageFile, WorkflowState};
use crate::validation::{validate_declared, validate_image};
use crate::workflow::{Completion, UploadWorkflow};

/// start_analysis()の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// 画像未選択・解析中・結果表示中のため何もしなかった
    Ignored,
    /// 結果を保存した
    Stored,
    /// 解析に失敗した
    Failed,
    /// 完了前にリセットされたため結果を破棄した
    Stale,
}

pub struct ToolSession<A, N, P: PreviewFactory> {
    workflow: Rc<RefCell<UploadWorkflow<P::Preview>>>,
    service: Rc<A>,
    notifier: Rc<N>,
    previews: Rc<P>,
}

impl<A, N, P: PreviewFactory> Clone for ToolSession<A, N, P> {
    fn clone(&self) -> Self {
        Self {
            workflow: Rc::clone(&self.workflow),
            service: Rc::clone(&self.service),
            notifier: Rc::clone(&self.notifier),
            previews: Rc::clone(&self.previews),
        }
    }
}

impl<A, N, P> ToolSession<A, N, P>
where
    A: AnalysisService,
    N: Notifier,
    P: PreviewFactory,
{
    pub fn new(service: A, notifier: N, previews: P) -> Self {
        Self {
            workflow: Rc::new(RefCell::new(UploadWorkflow::new())),
            service: Rc::new(service),
            notifier: Rc::new(notifier),
            previews: Rc::new(previews),
        }
    }

    pub fn service(&self) -> &A {
        &self.service
    }

    pub fn state(&self) -> WorkflowState {
        self.workflow.borrow().state()
    }

    pub fn image(&self) -> Option<ImageFile> {
        self.workflow.borrow().image().cloned()
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.workflow.borrow().result().cloned()
    }

    pub fn preview_url(&self) -> Option<String> {
        self.workflow.borrow().preview().map(|p| p.url().to_string())
    }

    /// 画像を選択する
    ///
    /// 検証エラー・Busyでは通知を出し、状態は変更しない。
    /// プレビュー生成の失敗は旧画像の解放後に起きるため、状態はIdleになる。
    pub fn select_image(&self, file: ImageFile) -> Result<()> {
        let outcome = self.try_select(file);
        if let Err(e) = &outcome {
            warn!("image rejected: {}", e);
            self.notifier.notify(e.notice());
        }
        outcome
    }

    /// 内容を読み込む前に宣言値だけで検証する
    ///
    /// 失敗時はselect_image()と同じ通知を出す
    pub fn precheck(&self, media_type: &str, size: u64) -> Result<()> {
        let outcome = validate_declared(media_type, size);
        if let Err(e) = &outcome {
            warn!("image rejected before read: {}", e);
            self.notifier.notify(e.notice());
        }
        outcome
    }

    fn try_select(&self, file: ImageFile) -> Result<()> {
        validate_image(&file)?;
        if self.workflow.borrow().is_analyzing() {
            return Err(Error::Busy);
        }

        // 旧プレビューを解放してから新しいプレビューを作る（同時に2つ持たない）
        self.workflow.borrow_mut().reset();
        let preview = self.previews.create(&file)?;
        self.workflow.borrow_mut().select(file, preview)
    }

    /// 解析を実行する
    ///
    /// 解析中の再呼び出しはIgnored。失敗しても自動リトライしない。
    pub async fn start_analysis(&self) -> StartOutcome {
        let ticket = self.workflow.borrow_mut().begin_analysis();
        let Some(ticket) = ticket else {
            return StartOutcome::Ignored;
        };

        let outcome = self.service.analyze(&ticket.image).await;
        let completion = self.workflow.borrow_mut().complete(ticket, outcome);

        match completion {
            Completion::Stored => {
                info!(service = self.service.name(), "analysis complete");
                self.notifier.notify(Notice::analysis_complete());
                StartOutcome::Stored
            }
            Completion::Failed(e) => {
                warn!(service = self.service.name(), "analysis failed: {}", e);
                self.notifier.notify(Notice::analysis_failed());
                StartOutcome::Failed
            }
            Completion::Stale => StartOutcome::Stale,
        }
    }

    /// 初期状態に戻す
    pub fn reset(&self) {
        self.workflow.borrow_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::service::StubAnalysisService;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::Cell;

    const MIB: usize = 1024 * 1024;

    /// 生存中のプレビュー数を数える
    #[derive(Default)]
    struct CountingPreviews {
        live: Rc<Cell<usize>>,
        created: Cell<usize>,
        fail: Cell<bool>,
    }

    struct CountedPreview {
        url: String,
        live: Rc<Cell<usize>>,
    }

    impl Preview for CountedPreview {
        fn url(&self) -> &str {
            &self.url
        }
    }

    impl Drop for CountedPreview {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl PreviewFactory for CountingPreviews {
        type Preview = CountedPreview;

        fn create(&self, file: &ImageFile) -> Result<CountedPreview> {
            if self.fail.get() {
                return Err(Error::Preview("disk full".to_string()));
            }
            self.live.set(self.live.get() + 1);
            self.created.set(self.created.get() + 1);
            Ok(CountedPreview {
                url: format!("preview://{}/{}", self.created.get(), file.name),
                live: Rc::clone(&self.live),
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    /// 外部から完了させるまで待機する解析サービス
    #[derive(Default)]
    struct GatedService {
        gate: RefCell<Option<oneshot::Receiver<Result<AnalysisResult>>>>,
        calls: Cell<usize>,
    }

    impl GatedService {
        fn arm(&self) -> oneshot::Sender<Result<AnalysisResult>> {
            let (tx, rx) = oneshot::channel();
            *self.gate.borrow_mut() = Some(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl AnalysisService for GatedService {
        fn name(&self) -> &str {
            "gated"
        }

        async fn analyze(&self, _image: &ImageFile) -> Result<AnalysisResult> {
            self.calls.set(self.calls.get() + 1);
            let rx = self.gate.borrow_mut().take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(Error::AnalysisFailed("gate dropped".to_string()))),
                None => Err(Error::AnalysisFailed("not armed".to_string())),
            }
        }
    }

    fn jpeg(size: usize) -> ImageFile {
        ImageFile::new("lesion.jpg", "image/jpeg", vec![0u8; size])
    }

    fn png(size: usize) -> ImageFile {
        ImageFile::new("lesion.png", "image/png", vec![0u8; size])
    }

    fn stub_session(
        service: StubAnalysisService,
    ) -> ToolSession<StubAnalysisService, RecordingNotifier, CountingPreviews> {
        ToolSession::new(service, RecordingNotifier::default(), CountingPreviews::default())
    }

    fn live(session: &ToolSession<impl AnalysisService, RecordingNotifier, CountingPreviews>) -> usize {
        session.previews.live.get()
    }

    #[test]
    fn test_invalid_type_leaves_state_unchanged() {
        let session = stub_session(StubAnalysisService::default());
        let err = session
            .select_image(ImageFile::new("notes.pdf", "application/pdf", vec![0u8; 10]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidType { .. }));
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(live(&session), 0);

        let notices = session.notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Destructive);
        assert!(notices[0].description.contains("JPG"));
    }

    #[test]
    fn test_too_large_png_stays_idle() {
        let session = stub_session(StubAnalysisService::default());
        let err = session.select_image(png(6 * MIB)).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(live(&session), 0);
        assert_eq!(session.notifier.notices.borrow()[0].title, "File too large");
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let session = stub_session(StubAnalysisService::default());
        session.select_image(jpeg(MIB)).unwrap();
        let before = session.preview_url();

        assert!(session.select_image(png(6 * MIB)).is_err());
        assert_eq!(session.state(), WorkflowState::ImageSelected);
        assert_eq!(session.preview_url(), before);
        assert_eq!(live(&session), 1);
    }

    #[test]
    fn test_precheck_notifies_without_touching_state() {
        let session = stub_session(StubAnalysisService::default());
        session.select_image(jpeg(MIB)).unwrap();

        assert!(session.precheck("image/png", (10 * MIB) as u64).is_err());
        assert!(session.precheck("image/png", MIB as u64).is_ok());
        assert_eq!(session.state(), WorkflowState::ImageSelected);
        assert_eq!(session.notifier.notices.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_preview_failure_after_result() {
        let session = stub_session(StubAnalysisService::default());
        session.select_image(jpeg(MIB)).unwrap();
        session.start_analysis().await;
        assert_eq!(session.state(), WorkflowState::ResultReady);

        session.previews.fail.set(true);
        let err = session.select_image(png(MIB)).unwrap_err();
        assert!(matches!(err, Error::Preview(_)));

        // 旧画像・結果・プレビューは解放済み
        assert_eq!(session.state(), WorkflowState::Idle);
        assert!(session.result().is_none());
        assert_eq!(live(&session), 0);

        let notices = session.notifier.notices.borrow();
        assert_eq!(notices.last().map(|n| n.title.as_str()), Some("Preview failed"));
    }

    #[test]
    fn test_repeated_selection_holds_one_preview() {
        let session = stub_session(StubAnalysisService::default());
        for _ in 0..5 {
            session.select_image(jpeg(MIB)).unwrap();
            assert_eq!(live(&session), 1);
        }
        assert_eq!(session.previews.created.get(), 5);
        assert_eq!(session.state(), WorkflowState::ImageSelected);
    }

    #[tokio::test]
    async fn test_happy_path_stores_exact_result() {
        let expected = AnalysisResult {
            confidence: 0.75,
            prediction: "Suspicious lesion detected".to_string(),
            recommendations: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        };
        let session = stub_session(StubAnalysisService::new(expected.clone()));

        session.select_image(jpeg(2 * MIB)).unwrap();
        assert_eq!(session.state(), WorkflowState::ImageSelected);

        assert_eq!(session.start_analysis().await, StartOutcome::Stored);
        assert_eq!(session.state(), WorkflowState::ResultReady);
        assert_eq!(session.result(), Some(expected));

        let notices = session.notifier.notices.borrow();
        assert_eq!(notices.last().unwrap().title, "Analysis complete");
        assert_eq!(notices.last().unwrap().severity, Severity::Normal);
    }

    #[tokio::test]
    async fn test_analysis_failure_reverts_to_image_selected() {
        let session = stub_session(StubAnalysisService::failing("service unavailable"));
        session.select_image(jpeg(MIB)).unwrap();

        assert_eq!(session.start_analysis().await, StartOutcome::Failed);
        assert_eq!(session.state(), WorkflowState::ImageSelected);
        assert!(session.result().is_none());
        assert_eq!(session.service().calls(), 1);

        let notices = session.notifier.notices.borrow();
        assert_eq!(notices.last().unwrap().title, "Analysis failed");
        assert_eq!(notices.last().unwrap().severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn test_start_without_image_is_noop() {
        let session = stub_session(StubAnalysisService::default());
        assert_eq!(session.start_analysis().await, StartOutcome::Ignored);
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(session.service().calls(), 0);
        assert!(session.notifier.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_start_invokes_service_once() {
        let session = ToolSession::new(
            GatedService::default(),
            RecordingNotifier::default(),
            CountingPreviews::default(),
        );
        session.select_image(jpeg(2 * MIB)).unwrap();
        let tx = session.service().arm();

        let (first, second, ()) = futures::join!(
            session.start_analysis(),
            session.start_analysis(),
            async {
                assert_eq!(session.state(), WorkflowState::Analyzing);
                tx.send(Ok(AnalysisResult::default())).unwrap();
            }
        );

        assert_eq!(first, StartOutcome::Stored);
        assert_eq!(second, StartOutcome::Ignored);
        assert_eq!(session.service().calls.get(), 1);
        assert_eq!(session.state(), WorkflowState::ResultReady);
    }

    #[tokio::test]
    async fn test_reset_during_analysis_discards_result() {
        let session = ToolSession::new(
            GatedService::default(),
            RecordingNotifier::default(),
            CountingPreviews::default(),
        );
        session.select_image(jpeg(MIB)).unwrap();
        let tx = session.service().arm();

        let (outcome, ()) = futures::join!(session.start_analysis(), async {
            session.reset();
            assert_eq!(live(&session), 0);
            tx.send(Ok(AnalysisResult::default())).unwrap();
        });

        assert_eq!(outcome, StartOutcome::Stale);
        assert_eq!(session.state(), WorkflowState::Idle);
        assert!(session.result().is_none());
        assert!(session.notifier.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_select_during_analysis_is_rejected() {
        let session = ToolSession::new(
            GatedService::default(),
            RecordingNotifier::default(),
            CountingPreviews::default(),
        );
        session.select_image(jpeg(MIB)).unwrap();
        let tx = session.service().arm();

        let (outcome, ()) = futures::join!(session.start_analysis(), async {
            let err = session.select_image(png(MIB)).unwrap_err();
            assert!(matches!(err, Error::Busy));
            assert_eq!(live(&session), 1);
            tx.send(Ok(AnalysisResult::default())).unwrap();
        });

        assert_eq!(outcome, StartOutcome::Stored);
        assert_eq!(session.image().unwrap().name, "lesion.jpg");
    }

    #[tokio::test]
    async fn test_new_image_after_result_discards_previous() {
        let session = stub_session(StubAnalysisService::default());
        session.select_image(jpeg(MIB)).unwrap();
        session.start_analysis().await;
        assert_eq!(session.state(), WorkflowState::ResultReady);
        let old_preview = session.preview_url();

        session.select_image(png(MIB)).unwrap();
        assert_eq!(session.state(), WorkflowState::ImageSelected);
        assert!(session.result().is_none());
        assert_ne!(session.preview_url(), old_preview);
        assert_eq!(live(&session), 1);
    }

    #[tokio::test]
    async fn test_reset_from_any_state() {
        let session = stub_session(StubAnalysisService::default());
        session.reset();
        assert_eq!(session.state(), WorkflowState::Idle);

        session.select_image(jpeg(MIB)).unwrap();
        session.reset();
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(live(&session), 0);

        session.select_image(jpeg(MIB)).unwrap();
        session.start_analysis().await;
        session.reset();
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(live(&session), 0);
        assert!(session.result().is_none());
        assert!(session.preview_url().is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failure_is_explicit() {
        let session = ToolSession::new(
            GatedService::default(),
            RecordingNotifier::default(),
            CountingPreviews::default(),
        );
        session.select_image(jpeg(MIB)).unwrap();

        // 未準備のゲートは失敗を返す
        assert_eq!(session.start_analysis().await, StartOutcome::Failed);
        assert_eq!(session.service().calls.get(), 1);

        let tx = session.service().arm();
        tx.send(Ok(AnalysisResult::default())).unwrap();
        assert_eq!(session.start_analysis().await, StartOutcome::Stored);
        assert_eq!(session.service().calls.get(), 2);
    }
}
