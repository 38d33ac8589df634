//! リモート解析サービス連携
//!
//! 画像バイト列をそのままPOSTし、AnalysisResultのJSONを受け取る。
//! タイムアウトはreqwestクライアントで設定し、失敗として扱う。

use async_trait::async_trait;
use crate::error::Result;
use ks_detect_common::{parse_analysis_response, AnalysisResult, AnalysisService, Error, ImageFile};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub struct RemoteAnalysisService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteAnalysisService {
    pub fn new(endpoint: &str, api_key: Option<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key,
        })
    }
}

impl fmt::Debug for RemoteAnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteAnalysisService")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait(?Send)]
impl AnalysisService for RemoteAnalysisService {
    fn name(&self) -> &str {
        "remote"
    }

    async fn analyze(&self, image: &ImageFile) -> ks_detect_common::Result<AnalysisResult> {
        debug!(endpoint = %self.endpoint, size = image.size(), "remote analysis request");

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, image.media_type.as_str())
            .body(image.content().to_vec());

        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::AnalysisFailed(format!("request error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::AnalysisFailed(format!("response read error: {}", e)))?;

        if !status.is_success() {
            return Err(Error::AnalysisFailed(format!("API error: {}", status)));
        }

        parse_analysis_response(&body)
    }
}
