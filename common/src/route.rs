//! 画面ルート（トップ / 学習 / ツール）

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Landing,
    Learn,
    Tool,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::Learn, Route::Tool];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Learn => "/learn",
            Route::Tool => "/tool",
        }
    }

    /// ナビゲーション表示名
    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Learn => "Learn",
            Route::Tool => "Detection Tool",
        }
    }

    /// パスまたはハッシュ（"#/learn"）から解決。不明なパスはトップ。
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/learn" | "learn" => Route::Learn,
            "/tool" | "tool" => Route::Tool,
            _ => Route::Landing,
        }
    }

    /// ハッシュルーティング用のhref
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landing" | "home" | "/" => Ok(Route::Landing),
            "learn" | "/learn" => Ok(Route::Learn),
            "tool" | "/tool" => Ok(Route::Tool),
            _ => Err(format!("Unknown page: {}. Use landing, learn, or tool", s)),
        }
    }
}
