//! 의존성 와이어링.
//!
//! 경로 결정, 어댑터 생성, 설정 컨트롤러와 데모 세션 조립.

use directories::UserDirs;
use liphera_core::config::{AppConfig, DemoConfig};
use liphera_core::config_manager::ConfigManager;
use liphera_core::error::CoreError;
use liphera_core::models::settings::ConfidenceThreshold;
use liphera_core::ports::camera::CameraAccess;
use liphera_demo::{DemoSession, SimulatedCamera, SimulatedLipReader};
use liphera_settings::{SettingsCodec, SettingsController};
use liphera_storage::{DirectoryExporter, FileKeyValueStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::notifier::ConsoleNotifier;

/// 설정 로드 결과
///
/// 로깅 초기화 전에 만들어지므로 로그는 남기지 않고 결과만 담는다.
pub struct LoadedConfig {
    pub config: AppConfig,
    /// 사용한 설정 파일 경로
    pub path: Option<PathBuf>,
    /// 설정 파일을 쓰지 못해 기본 설정으로 대체한 사유
    pub fallback_reason: Option<CoreError>,
}

impl LoadedConfig {
    /// 사용자에게 보여줄 대체 안내 (정상 로드 시 None)
    pub fn fallback_notice(&self) -> Option<String> {
        self.fallback_reason
            .as_ref()
            .map(|e| format!("설정 파일을 사용할 수 없어 기본 설정으로 실행합니다: {e}"))
    }

    /// 로깅 초기화 이후 로드 결과 보고
    pub fn report(&self) {
        if let Some(path) = &self.path {
            debug!("설정 파일: {}", path.display());
        }
        if let Some(notice) = self.fallback_notice() {
            warn!("{notice}");
            eprintln!("⚠️  {notice}");
        }
    }
}

/// 설정 파일 로드 (`--config` 경로 우선, 실패 시 기본 설정)
pub fn load_config(config_path: Option<&Path>) -> LoadedConfig {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path.to_path_buf()),
        None => ConfigManager::new(),
    };
    match manager {
        Ok(manager) => {
            let path = manager.config_path().to_path_buf();
            LoadedConfig {
                config: manager.into_config(),
                path: Some(path),
                fallback_reason: None,
            }
        }
        Err(e) => LoadedConfig {
            config: AppConfig::default_config(),
            path: None,
            fallback_reason: Some(e),
        },
    }
}

/// 데이터 디렉토리 결정 (CLI 인자 > 설정 파일 > 플랫폼 기본 경로)
///
/// # 플랫폼별 기본 경로:
/// - macOS: `~/Library/Application Support/com.liphera.liphera/`
/// - Windows: `%APPDATA%\liphera\liphera\data\`
/// - Linux: `~/.local/share/liphera/`
pub fn resolve_data_dir(cli: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| config.storage.data_dir.clone())
        .or_else(|| ConfigManager::data_dir().ok())
        .unwrap_or_else(|| PathBuf::from("./liphera-data"))
}

/// 내보내기 디렉토리 결정 (CLI 인자 > 설정 파일 > 다운로드 폴더 > 데이터 디렉토리)
pub fn resolve_export_dir(cli: Option<&Path>, config: &AppConfig, data_dir: &Path) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| config.export.dir.clone())
        .or_else(|| {
            UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| data_dir.to_path_buf())
}

/// 파일 저장소 기반 설정 컨트롤러 생성
pub fn settings_controller(
    data_dir: &Path,
    quota_bytes: u64,
    export_dir: &Path,
) -> Result<SettingsController, CoreError> {
    let store = Arc::new(FileKeyValueStore::open(data_dir, quota_bytes)?);
    let exporter = Arc::new(DirectoryExporter::new(export_dir));
    let codec = SettingsCodec::new(store, exporter);
    Ok(SettingsController::initialize(
        codec,
        Arc::new(ConsoleNotifier::new()),
    ))
}

/// 시뮬레이션 데모 세션 생성
pub fn demo_session(
    config: &DemoConfig,
    threshold: ConfidenceThreshold,
    deny_camera: bool,
) -> Result<DemoSession, CoreError> {
    let camera: Arc<dyn CameraAccess> = if deny_camera {
        Arc::new(SimulatedCamera::denied())
    } else {
        Arc::new(SimulatedCamera::granted())
    };
    let reader = Arc::new(SimulatedLipReader::from_config(config)?);
    DemoSession::new(camera, reader, config, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_data_dir_wins() {
        let mut config = AppConfig::default_config();
        config.storage.data_dir = Some(PathBuf::from("/from/config"));
        assert_eq!(
            resolve_data_dir(Some(Path::new("/from/cli")), &config),
            PathBuf::from("/from/cli")
        );
        assert_eq!(resolve_data_dir(None, &config), PathBuf::from("/from/config"));
    }

    #[test]
    fn export_dir_prefers_cli_then_config() {
        let mut config = AppConfig::default_config();
        let data = Path::new("/data");
        assert_eq!(
            resolve_export_dir(Some(Path::new("/out")), &config, data),
            PathBuf::from("/out")
        );
        config.export.dir = Some(PathBuf::from("/cfg-out"));
        assert_eq!(
            resolve_export_dir(None, &config, data),
            PathBuf::from("/cfg-out")
        );
    }

    #[test]
    fn missing_config_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let loaded = load_config(Some(&path));
        assert_eq!(loaded.config.demo.detection_interval_ms, 3000);
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        assert!(loaded.fallback_notice().is_none());
        assert!(path.exists());
    }

    #[test]
    fn broken_config_file_falls_back_with_notice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"demo\": ").unwrap();

        let loaded = load_config(Some(&path));

        assert_eq!(loaded.config, AppConfig::default_config());
        assert!(matches!(loaded.fallback_reason, Some(CoreError::Config(_))));
        let notice = loaded.fallback_notice().unwrap();
        assert!(notice.contains("기본 설정으로 실행"));
        assert!(notice.contains("config.json"));
    }

    #[test]
    fn controller_starts_from_defaults_in_empty_dir() {
        let dir = TempDir::new().unwrap();
        let controller =
            settings_controller(&dir.path().join("data"), 5 * 1024 * 1024, dir.path()).unwrap();
        assert!(!controller.has_unsaved_changes());
        assert_eq!(controller.current().volume.get(), 75);
    }

    #[tokio::test]
    async fn denied_demo_camera() {
        let mut session = demo_session(&DemoConfig::default(), ConfidenceThreshold::DEFAULT, true)
            .unwrap();
        let status = session.start().await;
        assert!(matches!(
            status,
            liphera_core::models::detection::CameraStatus::Denied(_)
        ));
    }
}
