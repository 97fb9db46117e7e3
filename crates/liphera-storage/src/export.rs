//! 디렉토리 내보내기 어댑터.
//!
//! `FileExporter` 포트 구현. 브라우저의 다운로드 폴더처럼
//! 지정된 디렉토리에 고정 이름 파일을 기록한다 (같은 이름이면 덮어쓰기).

use liphera_core::error::CoreError;
use liphera_core::ports::exporter::{ExportReceipt, FileExporter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 디렉토리 내보내기: `FileExporter` 포트 구현
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    target_dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

impl FileExporter for DirectoryExporter {
    fn export(&self, file_name: &str, contents: &str) -> Result<ExportReceipt, CoreError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(CoreError::Export(format!(
                "허용되지 않는 파일 이름: {file_name:?}"
            )));
        }

        fs::create_dir_all(&self.target_dir).map_err(|e| {
            CoreError::Export(format!(
                "내보내기 디렉토리 생성 실패: {}: {e}",
                self.target_dir.display()
            ))
        })?;

        let path = self.target_dir.join(file_name);
        fs::write(&path, contents)
            .map_err(|e| CoreError::Export(format!("파일 기록 실패: {}: {e}", path.display())))?;

        info!("설정 내보내기 완료: {} ({} bytes)", path.display(), contents.len());

        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            location: Some(path),
            bytes_written: contents.len(),
        })
    }
}
