//! tracingの初期化

use tracing_subscriber::EnvFilter;

/// RUST_LOG未設定時は warn（--verbose で info）
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テスト等で二重初期化された場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
