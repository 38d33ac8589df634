use clap::Parser;
use ks_detect::{analyzer, cli, config, error, logging, notifier, preview, render, tool};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use ks_detect_common::{PageContent, ToolSession};
use notifier::ConsoleNotifier;
use preview::ThumbnailPreviewFactory;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze { image, service: kind, json, output, delay_ms, save_preview } => {
            let mut config = Config::load()?;
            if let Some(ms) = delay_ms {
                config.demo.delay_ms = ms;
            }

            let service = analyzer::build_service(kind, &config)?;
            let session = ToolSession::new(
                service,
                ConsoleNotifier::new(json),
                ThumbnailPreviewFactory::default(),
            );

            if !json {
                println!("🔬 ks-detect - 画像解析\n");
                println!("[1/3] 画像を読み込み中...");
            }
            let file = tool::load_checked(&session, &image)?;
            if !json {
                println!("✔ {}\n", render::render_image_line(&file));
                println!("[2/3] AI解析中... ({})", kind.as_str());
            }

            let result = tool::run_analysis(&session, file, save_preview.as_deref(), !json).await?;

            let result_json = serde_json::to_string_pretty(&result)?;
            if json {
                println!("{}", result_json);
            } else {
                println!("\n[3/3] 結果\n");
                print!("{}", render::render_result(&result));
            }

            if let Some(output) = output {
                std::fs::write(&output, &result_json)?;
                if !json {
                    println!("\n✔ 結果を保存: {}", output.display());
                }
            }

            if !json {
                println!("\n⚠ This AI tool is for educational and screening purposes only. Always consult healthcare professionals.");
            }
        }

        Commands::Page { page, json } => {
            let content = PageContent::for_route(page);
            if json {
                println!("{}", serde_json::to_string_pretty(&content)?);
            } else {
                print!("{}", render::render_page(&content));
            }
        }

        Commands::Config { set_endpoint, set_api_key, set_delay_ms, set_timeout, reset, show } => {
            let path = Config::config_path()?;
            let mut config = Config::load_for_update(&path, reset)?;
            let changed = reset
                || set_endpoint.is_some()
                || set_api_key.is_some()
                || set_delay_ms.is_some()
                || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                println!("✔ APIキーを設定しました");
            }

            if let Some(ms) = set_delay_ms {
                config.demo.delay_ms = ms;
                println!("✔ デモ解析の待ち時間を設定しました: {}ms", ms);
            }

            if let Some(secs) = set_timeout {
                config.set_timeout(secs)?;
                println!("✔ タイムアウトを設定しました: {}秒", secs);
            }

            if changed {
                config.save_to(&path)?;
                if reset {
                    println!("✔ 設定を初期化しました");
                }
            }

            if show || !changed {
                println!("設定: {}", path.display());
                println!("  エンドポイント: {}", config.endpoint.as_deref().unwrap_or("未設定"));
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  デモ待ち時間: {}ms", config.demo.delay_ms);
                println!("  デモ結果: {} ({}%)",
                    config.demo.result.prediction,
                    ks_detect_common::confidence_percent(config.demo.result.confidence));
            }
        }
    }

    Ok(())
}
