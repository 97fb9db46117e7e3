//! 애플리케이션 설정 구조체.
//!
//! 사용자 설정(`SettingsRecord`)과 별개로, 저장 경로, 내보내기 경로,
//! 데모 감지 주기, 로그 레벨 같은 런타임 설정을 정의한다.
//! `ConfigManager`가 `config.json`에서 로드한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 로컬 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 내보내기 설정
    #[serde(default)]
    pub export: ExportConfig,
    /// 라이브 데모 설정
    #[serde(default)]
    pub demo: DemoConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 로컬 저장소 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 키-값 파일 디렉토리 (None이면 플랫폼 기본 경로)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// 키 하나에 허용되는 최대 크기 (bytes)
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: default_quota_bytes(),
        }
    }
}

/// 내보내기 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 내보내기 디렉토리 (None이면 다운로드 폴더)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// 라이브 데모 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 감지 주기 (밀리초)
    #[serde(default = "default_detection_interval_ms")]
    pub detection_interval_ms: u64,
    /// 기본 감지 언어 코드
    #[serde(default = "default_language")]
    pub language: String,
    /// 시뮬레이션 신뢰도 하한 (%)
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
    /// 시뮬레이션 신뢰도 상한 (%, 미포함)
    #[serde(default = "default_max_confidence")]
    pub max_confidence: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            detection_interval_ms: default_detection_interval_ms(),
            language: default_language(),
            min_confidence: default_min_confidence(),
            max_confidence: default_max_confidence(),
        }
    }
}

/// 로깅 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            storage: StorageConfig::default(),
            export: ExportConfig::default(),
            demo: DemoConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// 데모 감지 주기를 Duration으로 반환
    pub fn detection_interval(&self) -> Duration {
        Duration::from_millis(self.demo.detection_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024 // 브라우저 localStorage와 같은 5MiB
}
fn default_detection_interval_ms() -> u64 {
    3_000
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_min_confidence() -> f32 {
    85.0
}
fn default_max_confidence() -> f32 {
    100.0
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default_config();
        assert_eq!(config.demo.detection_interval_ms, 3_000);
        assert_eq!(config.detection_interval(), Duration::from_secs(3));
        assert_eq!(config.demo.language, "en-US");
        assert_eq!(config.storage.quota_bytes, 5 * 1024 * 1024);
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"demo": {"detection_interval_ms": 500}}"#).unwrap();
        assert_eq!(config.demo.detection_interval_ms, 500);
        assert_eq!(config.demo.min_confidence, 85.0);
        assert_eq!(config.storage, StorageConfig::default());
    }
}
