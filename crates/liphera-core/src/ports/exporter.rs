//! 파일 내보내기 포트 (클라이언트 측 다운로드 대응).
//!
//! 구현: `liphera-storage` crate

use serde::Serialize;
use std::path::PathBuf;

use crate::error::CoreError;

/// 내보내기 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    /// 요청한 파일 이름
    pub file_name: String,
    /// 실제 기록 위치 (인메모리 구현은 `None`)
    pub location: Option<PathBuf>,
    /// 기록한 바이트 수
    pub bytes_written: usize,
}

/// 고정 이름 파일로 내용을 내보내는 대상
pub trait FileExporter: Send + Sync {
    fn export(&self, file_name: &str, contents: &str) -> Result<ExportReceipt, CoreError>;
}
