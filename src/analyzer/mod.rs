//! 解析サービスの選択
//!
//! - demo: 待ち時間のあと設定済みの固定結果を返す
//! - remote: 設定済みエンドポイントへ画像をPOSTする

mod demo;
mod remote;

pub use demo::DemoAnalysisService;
pub use remote::RemoteAnalysisService;

use clap::ValueEnum;
use crate::config::Config;
use crate::error::Result;
use ks_detect_common::AnalysisService;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    Demo,
    Remote,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Demo => "demo",
            ServiceKind::Remote => "remote",
        }
    }
}

/// 設定から解析サービスを構築
pub fn build_service(kind: ServiceKind, config: &Config) -> Result<Box<dyn AnalysisService>> {
    let service: Box<dyn AnalysisService> = match kind {
        ServiceKind::Demo => Box::new(DemoAnalysisService::new(config.demo.clone())),
        ServiceKind::Remote => Box::new(RemoteAnalysisService::new(
            config.endpoint()?,
            config.api_key(),
            config.timeout_seconds,
        )?),
    };
    Ok(service)
}
