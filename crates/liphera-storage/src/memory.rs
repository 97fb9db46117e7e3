//! 인메모리 어댑터.
//!
//! 테스트와 임시 세션용 `KeyValueStore` / `FileExporter` 구현.
//! 쓰기 횟수와 마지막 내보내기 내용을 관찰할 수 있다.

use liphera_core::error::CoreError;
use liphera_core::ports::exporter::{ExportReceipt, FileExporter};
use liphera_core::ports::key_value::KeyValueStore;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// 인메모리 키-값 저장소: `KeyValueStore` 포트 구현
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    /// 키 하나에 허용되는 최대 크기 (None이면 무제한)
    quota_bytes: Option<u64>,
    /// `set` 호출 횟수
    writes: AtomicUsize,
    /// 쓰기 불가 상태 (저장소 비활성화 시뮬레이션)
    read_only: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 키당 용량 제한이 있는 저장소
    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// 초기 값이 있는 저장소 (쓰기 횟수에 포함되지 않음)
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.write().insert(key.to_string(), value.to_string());
        store
    }

    /// 성공한 쓰기 횟수
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// 쓰기 가능 여부 전환
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// 저장된 원본 문자열
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("저장소를 사용할 수 없습니다".to_string()));
        }
        if let Some(limit) = self.quota_bytes {
            let needed = value.len() as u64;
            if needed > limit {
                return Err(CoreError::QuotaExceeded { needed, limit });
            }
        }

        self.entries.write().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("저장소를 사용할 수 없습니다".to_string()));
        }
        self.entries.write().remove(key);
        Ok(())
    }
}

/// 내보낸 파일 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
}

/// 인메모리 내보내기 대상: `FileExporter` 포트 구현
#[derive(Debug, Default)]
pub struct InMemoryExporter {
    files: Mutex<Vec<ExportedFile>>,
}

impl InMemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 마지막으로 내보낸 파일
    pub fn last(&self) -> Option<ExportedFile> {
        self.files.lock().last().cloned()
    }

    /// 내보낸 횟수
    pub fn count(&self) -> usize {
        self.files.lock().len()
    }
}

impl FileExporter for InMemoryExporter {
    fn export(&self, file_name: &str, contents: &str) -> Result<ExportReceipt, CoreError> {
        self.files.lock().push(ExportedFile {
            file_name: file_name.to_string(),
            contents: contents.to_string(),
        });
        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            location: None,
            bytes_written: contents.len(),
        })
    }
}
