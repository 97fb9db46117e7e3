//! # liphera-demo
//!
//! 라이브 데모 어댑터.
//! 실제 모델 대신 시뮬레이션 카메라와 립리더로 감지 흐름을 재현한다.
//!
//! - [`camera`]: `CameraAccess` 포트 구현 (허용/거부)
//! - [`detector`]: `LipReader` 포트 구현 (예시 문장 순환)
//! - [`session`]: 녹화 세션과 감지 루프
//! - [`languages`]: 데모 언어, 언어 팩 카탈로그

pub mod camera;
pub mod detector;
pub mod languages;
pub mod samples;
pub mod session;

pub use camera::SimulatedCamera;
pub use detector::SimulatedLipReader;
pub use session::{DemoSession, DemoSnapshot};
