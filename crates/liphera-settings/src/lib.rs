//! # liphera-settings
//!
//! 사용자 설정 파이프라인.
//! 로컬 저장소의 설정 레코드를 로드/검증하고, 세션 동안 인메모리로 편집하며,
//! 명시적인 저장/내보내기/캐시 삭제 요청을 저장소 포트로 전달한다.

pub mod codec;
pub mod controller;

pub use codec::SettingsCodec;
pub use controller::SettingsController;
