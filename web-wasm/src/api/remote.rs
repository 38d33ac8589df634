//! リモート解析サービス連携（fetch）

use async_trait::async_trait;
use ks_detect_common::{parse_analysis_response, AnalysisResult, AnalysisService, Error, ImageFile, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct RemoteAnalysisService {
    endpoint: String,
}

impl RemoteAnalysisService {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

/// JsValueのエラーを解析失敗に変換
fn js_failure(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::AnalysisFailed(message)
}

async fn post_image(endpoint: &str, image: &ImageFile) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = js_sys::Uint8Array::from(image.content());
    opts.set_body(&JsValue::from(body));

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("Content-Type", &image.media_type)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

#[async_trait(?Send)]
impl AnalysisService for RemoteAnalysisService {
    fn name(&self) -> &str {
        "remote"
    }

    async fn analyze(&self, image: &ImageFile) -> Result<AnalysisResult> {
        let body = post_image(&self.endpoint, image).await.map_err(js_failure)?;
        parse_analysis_response(&body)
    }
}
