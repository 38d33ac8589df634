use clap::{Parser, Subcommand};
use crate::analyzer::ServiceKind;
use ks_detect_common::Route;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ks-detect")]
#[command(about = "Kaposi Sarcoma awareness & lesion image analysis demo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析サービス (demo/remote)
        #[arg(short, long, default_value = "demo")]
        service: ServiceKind,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// デモ解析の待ち時間（ミリ秒、設定値を上書き）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// プレビュー画像の保存先
        #[arg(long)]
        save_preview: Option<PathBuf>,
    },

    /// ページ内容を表示
    Page {
        /// ページ (landing/learn/tool)
        #[arg(default_value = "landing")]
        page: Route,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// リモート解析のエンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// デモ解析の待ち時間を設定（ミリ秒）
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// リモート解析のタイムアウトを設定（秒）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
