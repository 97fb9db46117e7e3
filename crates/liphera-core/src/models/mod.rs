//! 도메인 모델.

pub mod detection;
pub mod processing;
pub mod settings;
pub mod voice;
