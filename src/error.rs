use thiserror::Error;

#[derive(Error, Debug)]
pub enum KsDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("リモート解析のエンドポイントが設定されていません。`ks-detect config --set-endpoint URL` で設定してください")]
    MissingEndpoint,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Workflow(#[from] ks_detect_common::Error),

    #[error("解析に失敗しました")]
    AnalysisFailed,
}

pub type Result<T> = std::result::Result<T, KsDetectError>;
