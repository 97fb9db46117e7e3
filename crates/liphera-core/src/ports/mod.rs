//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 각 어댑터 crate가 이 trait들을 구현하며,
//! `liphera-app`에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 설정 경로(저장소, 내보내기, 알림)는 동기 호출이고,
//! 데모 경로(카메라, 립리더)는 `async_trait`을 사용한다.

pub mod camera;
pub mod exporter;
pub mod key_value;
pub mod lip_reader;
pub mod notifier;
