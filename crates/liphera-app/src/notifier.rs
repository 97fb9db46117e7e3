//! 콘솔 알림 어댑터.
//!
//! `UserNotifier` 포트 구현. 표준 에러로 출력한다.

use liphera_core::ports::notifier::UserNotifier;
use tracing::warn;

/// 콘솔 알림 어댑터: `UserNotifier` 포트 구현
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UserNotifier for ConsoleNotifier {
    fn show_notice(&self, title: &str, body: &str) {
        warn!("알림: {title}");
        eprintln!("⚠️  {title}");
        if !body.is_empty() {
            eprintln!("   {body}");
        }
    }
}
