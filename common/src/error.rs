//! エラー型定義

use thiserror::Error;
use crate::notify::{Notice, Severity};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid file type: {media_type}")]
    InvalidType { media_type: String },

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Analysis in progress")]
    Busy,

    #[error("Preview error: {0}")]
    Preview(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// ユーザー向け通知に変換
    ///
    /// ファイル選択・解析のエラーは全てdestructiveで表示する
    pub fn notice(&self) -> Notice {
        match self {
            Error::InvalidType { .. } => Notice::destructive(
                "Invalid file type",
                "Please select an image file (JPG, PNG, etc.)",
            ),
            Error::TooLarge { .. } => Notice::destructive(
                "File too large",
                "Please select an image smaller than 5MB",
            ),
            Error::AnalysisFailed(_) => Notice::analysis_failed(),
            Error::Busy => Notice::destructive(
                "Analysis in progress",
                "Please wait for the current analysis to finish.",
            ),
            Error::Preview(_) => Notice::destructive(
                "Preview failed",
                "The selected image could not be displayed. Please select it again.",
            ),
            other => Notice {
                severity: Severity::Destructive,
                title: "Something went wrong".to_string(),
                description: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_type() {
        let error = Error::InvalidType { media_type: "application/pdf".to_string() };
        assert_eq!(format!("{}", error), "Invalid file type: application/pdf");
    }

    #[test]
    fn test_error_display_too_large() {
        let error = Error::TooLarge { size: 6_291_456, limit: 5_242_880 };
        let display = format!("{}", error);
        assert!(display.contains("6291456"));
        assert!(display.contains("5242880"));
    }

    #[test]
    fn test_invalid_type_notice_names_formats() {
        let notice = Error::InvalidType { media_type: "text/plain".to_string() }.notice();
        assert_eq!(notice.severity, Severity::Destructive);
        assert!(notice.description.contains("JPG"));
        assert!(notice.description.contains("PNG"));
    }

    #[test]
    fn test_too_large_notice_states_limit() {
        let notice = Error::TooLarge { size: 1, limit: 0 }.notice();
        assert_eq!(notice.title, "File too large");
        assert!(notice.description.contains("5MB"));
    }

    #[test]
    fn test_analysis_failed_notice() {
        let notice = Error::AnalysisFailed("timeout".to_string()).notice();
        assert_eq!(notice.title, "Analysis failed");
        assert_eq!(notice.severity, Severity::Destructive);
    }

    #[test]
    fn test_preview_notice() {
        let notice = Error::Preview("disk full".to_string()).notice();
        assert_eq!(notice.title, "Preview failed");
        assert_eq!(notice.severity, Severity::Destructive);
    }

    #[test]
    fn test_io_notice_is_generic() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let notice = Error::from(io_error).notice();
        assert_eq!(notice.title, "Something went wrong");
        assert!(notice.description.contains("disk full"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }
}
