//! 카메라 접근 포트.
//!
//! 데모 화면 표시용 비디오 캡처 권한만 다룬다 (오디오 없음).
//! 구현: `liphera-demo` crate (시뮬레이션)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::detection::CaptureConstraints;

/// 카메라 접근 인터페이스
#[async_trait]
pub trait CameraAccess: Send + Sync {
    /// 비디오 스트림 요청. 거부 시 `CoreError::PermissionDenied`.
    async fn request_video(&self, constraints: &CaptureConstraints) -> Result<(), CoreError>;

    /// 스트림의 모든 트랙 해제
    async fn release(&self);
}
