//! デモ解析（一定時間待って固定結果を返す）

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use ks_detect_common::{AnalysisResult, AnalysisService, DemoConfig, ImageFile, Result};

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

    async fn analyze(&self, _image: &ImageFile) -> Result<AnalysisResult> {
        let delay = u32::try_from(self.config.delay_ms).unwrap_or(u32::MAX);
        TimeoutFuture::new(delay).await;
        Ok(self.config.result.clone())
    }
}
