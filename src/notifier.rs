//! コンソール通知

use ks_detect_common::{Notice, Notifier, Severity};

/// 通常の通知はstdout、destructiveはstderrへ出力する。
/// JSON出力時はstdoutを汚さないよう全てstderrへ出す。
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    stderr_only: bool,
}

impl ConsoleNotifier {
    pub fn new(stderr_only: bool) -> Self {
        Self { stderr_only }
    }

    pub fn format(notice: &Notice) -> String {
        let mark = match notice.severity {
            Severity::Normal => "✔",
            Severity::Destructive => "✖",
        };
        format!("{} {}: {}", mark, notice.title, notice.description)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Normal if !self.stderr_only => println!("{}", Self::format(&notice)),
            _ => eprintln!("{}", Self::format(&notice)),
        }
    }
}
