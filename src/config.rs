use crate::error::{KsDetectError, Result};
use ks_detect_common::DemoConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const API_KEY_ENV: &str = "KS_DETECT_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// リモート解析のエンドポイント
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_seconds: 60,
            demo: DemoConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// configコマンドの起点（--resetでは壊れたファイルも読まない）
    pub fn load_for_update(path: &Path, reset: bool) -> Result<Self> {
        if reset {
            Ok(Self::default())
        } else {
            Self::load_from(path)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KsDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ks-detect").join("config.json"))
    }

    /// APIキー（環境変数を優先）
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(KsDetectError::MissingEndpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(KsDetectError::Config(format!(
                "エンドポイントはhttp(s)のURLで指定してください: {}",
                endpoint
            )));
        }
        self.endpoint = Some(endpoint);
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(KsDetectError::Config(
                "タイムアウトは1秒以上で指定してください".to_string(),
            ));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_seconds, 60);
        assert_eq!(config.demo.delay_ms, 3000);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_endpoint("https://example.com/analyze".to_string()).unwrap();
        config.demo.delay_ms = 10;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint.as_deref(), Some("https://example.com/analyze"));
        assert_eq!(loaded.demo.delay_ms, 10);
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_set_endpoint_rejects_non_http() {
        let mut config = Config::default();
        assert!(config.set_endpoint("ftp://example.com".to_string()).is_err());
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_corrupt_file_recovered_by_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(KsDetectError::JsonParse(_))));
        assert!(Config::load_for_update(&path, false).is_err());

        let config = Config::load_for_update(&path, true).unwrap();
        assert_eq!(config, Config::default());
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_timeout_rejects_zero() {
        let mut config = Config::default();
        assert!(matches!(config.set_timeout(0), Err(KsDetectError::Config(_))));
        assert_eq!(config.timeout_seconds, 60);

        config.set_timeout(5).unwrap();
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_missing_endpoint() {
        let config = Config::default();
        assert!(matches!(config.endpoint(), Err(KsDetectError::MissingEndpoint)));
    }
}
