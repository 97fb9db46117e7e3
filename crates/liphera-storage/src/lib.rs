//! # liphera-storage
//!
//! 로컬 저장소 어댑터.
//! 설정 레코드를 담는 키-값 저장소와 설정 파일 내보내기 대상을 제공한다.
//!
//! ## 모듈
//! - `local_store`: 파일 기반 키-값 저장소 (KeyValueStore 구현)
//! - `memory`: 인메모리 저장소/내보내기 (테스트, 임시 세션)
//! - `export`: 디렉토리 내보내기 (FileExporter 구현)

pub mod export;
pub mod local_store;
pub mod memory;

pub use export::DirectoryExporter;
pub use local_store::FileKeyValueStore;
pub use memory::{InMemoryExporter, InMemoryKeyValueStore};
