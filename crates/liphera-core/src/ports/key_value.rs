//! 로컬 키-값 저장소 포트 (브라우저 localStorage 대응).
//!
//! 구현: `liphera-storage` crate (파일 기반, 인메모리)

use crate::error::CoreError;

/// 문자열 키-값 저장소
///
/// 모든 호출은 동기 로컬 호출로 취급한다.
pub trait KeyValueStore: Send + Sync {
    /// 키 조회 (없으면 `None`)
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// 키에 값 기록 (기존 값 덮어쓰기)
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// 키 삭제 (없어도 성공)
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}
