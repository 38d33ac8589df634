//! 解析ワークフローの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ImageFile: ユーザーが選択した画像ファイル
//! - AnalysisResult: 解析結果（デモ/リモート共通）
//! - WorkflowState: ワークフローの導出状態

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// ユーザーが選択した画像ファイル
///
/// バイト列は共有され、解析サービスへ渡す際にコピーしない
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub media_type: String,
    content: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// バイト数
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size())
            .finish()
    }
}

/// 解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 確信度 (0.0-1.0)
    pub confidence: f64,

    pub prediction: String,

    /// 推奨事項（表示順を保持）
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// 確信度が[0,1]に収まっているか
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

impl Default for AnalysisResult {
    /// デモ解析の固定結果
    fn default() -> Self {
        Self {
            confidence: 0.75,
            prediction: "Suspicious lesion detected".to_string(),
            recommendations: vec![
                "Consult with a dermatologist or oncologist immediately".to_string(),
                "Schedule a biopsy for definitive diagnosis".to_string(),
                "Document any changes in the lesion over time".to_string(),
                "Consider imaging studies if systemic involvement is suspected".to_string(),
            ],
        }
    }
}

/// ワークフロー状態（保持せず導出する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowState {
    Idle,
    ImageSelected,
    Analyzing,
    ResultReady,
}

impl WorkflowState {
    /// 画像有無・解析中フラグ・結果有無から状態を導出
    pub fn derive(has_image: bool, analyzing: bool, has_result: bool) -> Self {
        match (has_image, analyzing, has_result) {
            (false, _, _) => WorkflowState::Idle,
            (true, true, _) => WorkflowState::Analyzing,
            (true, false, true) => WorkflowState::ResultReady,
            (true, false, false) => WorkflowState::ImageSelected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::ImageSelected => "image-selected",
            WorkflowState::Analyzing => "analyzing",
            WorkflowState::ResultReady => "result-ready",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// バイト数をMB表記（小数1桁）に変換
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / 1024.0 / 1024.0)
}

/// 確信度をパーセント（四捨五入）に変換
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}
