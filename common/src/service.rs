//! 解析サービスの抽象化
//!
//! - StubAnalysisService: 固定結果・遅延なし（テスト用）
//! - デモ（遅延付き固定結果）とリモート呼び出しは各フロントエンドで実装

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use crate::error::{Error, Result};
use crate::types::{AnalysisResult, ImageFile};

/// 解析サービス
///
/// WASMのFutureはSendでないため?Sendで定義
#[async_trait(?Send)]
pub trait AnalysisService {
    fn name(&self) -> &str;

    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult>;
}

#[async_trait(?Send)]
impl<T: AnalysisService + ?Sized> AnalysisService for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult> {
        (**self).analyze(image).await
    }
}

/// デモ解析の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// 疑似解析の待ち時間（ミリ秒）
    pub delay_ms: u64,
    pub result: AnalysisResult,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            result: AnalysisResult::default(),
        }
    }
}

/// 解析サービスのレスポンスJSONをパースして検証
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult = serde_json::from_str(body)
        .map_err(|e| Error::AnalysisFailed(format!("JSONパースエラー: {}", e)))?;

    if !result.is_valid() {
        return Err(Error::AnalysisFailed(format!(
            "confidence out of range: {}",
            result.confidence
        )));
    }

    Ok(result)
}

/// テスト用スタブ
#[derive(Debug)]
pub struct StubAnalysisService {
    outcome: std::result::Result<AnalysisResult, String>,
    calls: Cell<usize>,
}

impl StubAnalysisService {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Cell::new(0),
        }
    }

    /// analyze()の呼び出し回数
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Default for StubAnalysisService {
    fn default() -> Self {
        Self::new(AnalysisResult::default())
    }
}

#[async_trait(?Send)]
impl AnalysisService for StubAnalysisService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, _image: &ImageFile) -> Result<AnalysisResult> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone().map_err(Error::AnalysisFailed)
    }
}
