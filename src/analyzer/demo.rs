//! デモ解析（待ち時間付きの固定結果）

use async_trait::async_trait;
use ks_detect_common::{AnalysisResult, AnalysisService, DemoConfig, ImageFile, Result};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DemoAnalysisService {
    config: DemoConfig,
}

impl DemoAnalysisService {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AnalysisService for DemoAnalysisService {
    fn name(&self) -> &str {
        "demo"
    }

    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult> {
        debug!(name = %image.name, delay_ms = self.config.delay_ms, "demo analysis");
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        Ok(self.config.result.clone())
    }
}
