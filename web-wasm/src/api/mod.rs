//! 解析サービス（ブラウザ版）
//!
//! ビルド時に KS_DETECT_ENDPOINT が指定されていればリモート、なければデモ

pub mod demo;
pub mod remote;

use async_trait::async_trait;
use ks_detect_common::{AnalysisResult, AnalysisService, DemoConfig, ImageFile, Result};

pub use demo::DemoAnalysisService;
pub use remote::RemoteAnalysisService;

/// ビルド時に埋め込まれる解析エンドポイント
const ENDPOINT: Option<&str> = option_env!("KS_DETECT_ENDPOINT");

pub enum WebAnalysisService {
    Demo(DemoAnalysisService),
    Remote(RemoteAnalysisService),
}

impl WebAnalysisService {
    pub fn from_build_env() -> Self {
        match ENDPOINT.filter(|e| !e.trim().is_empty()) {
            Some(endpoint) => Self::Remote(RemoteAnalysisService::new(endpoint)),
            None => Self::Demo(DemoAnalysisService::new(DemoConfig::default())),
        }
    }
}

#[async_trait(?Send)]
impl AnalysisService for WebAnalysisService {
    fn name(&self) -> &str {
        match self {
            Self::Demo(s) => s.name(),
            Self::Remote(s) => s.name(),
        }
    }

    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult> {
        match self {
            Self::Demo(s) => s.analyze(image).await,
            Self::Remote(s) => s.analyze(image).await,
        }
    }
}
