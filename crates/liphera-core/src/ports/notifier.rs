//! 사용자 알림 포트.
//!
//! 저장 실패 같은 비치명적 문제를 사용자에게 알린다.
//! 구현: `liphera-app` crate (콘솔)

/// 비치명적 알림 인터페이스
pub trait UserNotifier: Send + Sync {
    /// 알림 표시 (제목 + 본문)
    fn show_notice(&self, title: &str, body: &str);
}
