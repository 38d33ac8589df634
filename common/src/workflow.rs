//! アップロード→解析ワークフローの状態機械
//!
//! 状態は保持せず、選択画像・解析中フラグ・結果から導出する。
//! 解析の開始と完了はチケットで対応付け、リセットや再選択の後に
//! 届いた完了は破棄する。

use tracing::debug;
use crate::error::{Error, Result};
use crate::types::{AnalysisResult, ImageFile, WorkflowState};
use crate::validation::validate_image;

/// 選択済み画像とそのプレビュー
#[derive(Debug)]
pub struct SelectedImage<V> {
    pub file: ImageFile,
    pub preview: V,
}

/// 解析開始時に発行されるチケット
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    generation: u64,
    pub image: ImageFile,
}

/// 解析完了の処理結果
#[derive(Debug)]
pub enum Completion {
    /// 結果を保存した（ResultReady）
    Stored,
    /// 失敗した（ImageSelectedへ戻る）
    Failed(Error),
    /// リセット・再選択済みのため破棄した
    Stale,
}

#[derive(Debug)]
pub struct UploadWorkflow<V> {
    selected: Option<SelectedImage<V>>,
    analyzing: bool,
    result: Option<AnalysisResult>,
    generation: u64,
}

impl<V> Default for UploadWorkflow<V> {
    fn default() -> Self {
        Self {
            selected: None,
            analyzing: false,
            result: None,
            generation: 0,
        }
    }
}

impl<V> UploadWorkflow<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        WorkflowState::derive(self.selected.is_some(), self.analyzing, self.result.is_some())
    }

    pub fn selected(&self) -> Option<&SelectedImage<V>> {
        self.selected.as_ref()
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.selected.as_ref().map(|s| &s.file)
    }

    pub fn preview(&self) -> Option<&V> {
        self.selected.as_ref().map(|s| &s.preview)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// 画像を選択する
    ///
    /// 検証に失敗した場合や解析中の場合は状態を変更しない。
    /// 旧プレビューは新プレビューを格納する前に解放される。
    pub fn select(&mut self, file: ImageFile, preview: V) -> Result<()> {
        validate_image(&file)?;
        if self.analyzing {
            return Err(Error::Busy);
        }

        // 旧プレビューを先に解放
        self.selected = None;
        self.result = None;
        self.generation += 1;

        debug!(name = %file.name, size = file.size(), "image selected");
        self.selected = Some(SelectedImage { file, preview });
        Ok(())
    }

    /// 解析を開始する
    ///
    /// ImageSelected以外ではNone（解析中の二重開始を含む）
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.state() != WorkflowState::ImageSelected {
            debug!(state = %self.state(), "analysis start ignored");
            return None;
        }

        let image = self.selected.as_ref()?.file.clone();
        self.analyzing = true;
        debug!(name = %image.name, "analysis started");

        Some(AnalysisTicket {
            generation: self.generation,
            image,
        })
    }

    /// 解析の完了を反映する
    pub fn complete(&mut self, ticket: AnalysisTicket, outcome: Result<AnalysisResult>) -> Completion {
        if !self.analyzing || ticket.generation != self.generation {
            debug!("stale analysis completion discarded");
            return Completion::Stale;
        }

        self.analyzing = false;

        match outcome {
            Ok(result) if result.is_valid() => {
                self.result = Some(result);
                Completion::Stored
            }
            Ok(result) => Completion::Failed(Error::AnalysisFailed(format!(
                "confidence out of range: {}",
                result.confidence
            ))),
            Err(e) => Completion::Failed(e),
        }
    }

    /// 初期状態へ戻す（プレビューも解放）
    pub fn reset(&mut self) {
        self.selected = None;
        self.result = None;
        self.analyzing = false;
        self.generation += 1;
        debug!("workflow reset");
    }
}
