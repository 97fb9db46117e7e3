//! 립리딩 감지 포트.
//!
//! 데모의 감지 루프는 이 trait에만 의존하므로
//! 실제 구현으로 교체해도 UI 코드는 바뀌지 않는다.
//! 구현: `liphera-demo` crate (`SimulatedLipReader`)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::detection::Detection;

/// 립리더 인터페이스
#[async_trait]
pub trait LipReader: Send + Sync {
    /// 다음 감지 결과
    async fn detect(&self) -> Result<Detection, CoreError>;

    /// 처음 문장부터 다시 시작
    fn reset(&self);
}
