//! 파일 기반 키-값 저장소.
//!
//! `KeyValueStore` 포트 구현. 키 하나가 파일 하나에 대응한다.
//! 구조: `<base_dir>/<key>`
//!
//! 쓰기는 임시 파일에 먼저 기록한 뒤 rename으로 교체하므로
//! 중간에 실패해도 기존 값이 깨지지 않는다.

use liphera_core::error::CoreError;
use liphera_core::ports::key_value::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 임시 파일 확장자
const TMP_SUFFIX: &str = ".tmp";

/// 파일 기반 키-값 저장소: `KeyValueStore` 포트 구현
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// 저장 디렉토리
    base_dir: PathBuf,
    /// 키 하나에 허용되는 최대 크기 (bytes)
    quota_bytes: u64,
}

impl FileKeyValueStore {
    /// 새 저장소 생성 (디렉토리가 없으면 생성)
    pub fn open(base_dir: impl Into<PathBuf>, quota_bytes: u64) -> Result<Self, CoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| {
            CoreError::Storage(format!(
                "저장소 디렉토리 생성 실패: {}: {e}",
                base_dir.display()
            ))
        })?;

        info!(
            "키-값 저장소 초기화: {} (키당 최대 {} bytes)",
            base_dir.display(),
            quota_bytes
        );

        Ok(Self {
            base_dir,
            quota_bytes,
        })
    }

    /// 저장 디렉토리
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 키에 해당하는 파일 경로 (경로 구분자 등 허용되지 않는 키는 거부)
    fn key_path(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(CoreError::validation("key", format!("허용되지 않는 키: {key:?}")));
        }
        Ok(self.base_dir.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("키 조회: {key} ({} bytes)", content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Storage(format!(
                "키 읽기 실패: {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.key_path(key)?;
        let needed = value.len() as u64;
        if needed > self.quota_bytes {
            return Err(CoreError::QuotaExceeded {
                needed,
                limit: self.quota_bytes,
            });
        }

        let tmp_path = self.base_dir.join(format!("{key}{TMP_SUFFIX}"));
        fs::write(&tmp_path, value).map_err(|e| {
            CoreError::Storage(format!("키 쓰기 실패: {}: {e}", tmp_path.display()))
        })?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CoreError::Storage(format!(
                "키 교체 실패: {}: {e}",
                path.display()
            )));
        }

        debug!("키 저장: {key} ({needed} bytes)");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("키 삭제: {key}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Storage(format!(
                "키 삭제 실패: {}: {e}",
                path.display()
            ))),
        }
    }
}
