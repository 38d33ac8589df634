//! 通知（トースト）の型と送信先

use serde::{Deserialize, Serialize};

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// ユーザー向け通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    /// 解析完了通知
    pub fn analysis_complete() -> Self {
        Self::normal(
            "Analysis complete",
            "Review the results below and consult with a healthcare professional.",
        )
    }

    /// 解析失敗通知
    pub fn analysis_failed() -> Self {
        Self::destructive(
            "Analysis failed",
            "There was an error processing your image. Please try again.",
        )
    }
}

/// 通知の送信先（戻り値は使わない）
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice),
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}
