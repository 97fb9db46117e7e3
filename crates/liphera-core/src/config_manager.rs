//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리의 `config.json`에서 `AppConfig`를 읽는다.
//! 파일이 없으면 기본 설정으로 새로 만든다. CLI는 실행마다 한 번만 읽으므로
//! 런타임 변경/재로드는 다루지 않는다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 설정 관리자
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 경로(`config_dir()/config.json`)에서 로드
    pub fn new() -> Result<Self, CoreError> {
        Self::with_path(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// 지정된 경로에서 로드. 파일이 없으면 기본 설정을 기록한다.
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        let config = match fs::read_to_string(&config_path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                CoreError::Config(format!("{} 파싱 실패: {e}", config_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default_config();
                write_default(&config_path, &config)?;
                config
            }
            Err(e) => {
                return Err(CoreError::Config(format!(
                    "{} 읽기 실패: {e}",
                    config_path.display()
                )))
            }
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 로드된 설정
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 설정 디렉토리
    ///
    /// - macOS: `~/Library/Application Support/com.liphera.liphera/`
    /// - Windows: `%APPDATA%\liphera\liphera\config\`
    /// - Linux: `~/.config/liphera/`
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        project_dirs().map(|p| p.config_dir().to_path_buf())
    }

    /// 플랫폼별 데이터 디렉토리 (키-값 저장소 파일)
    pub fn data_dir() -> Result<PathBuf, CoreError> {
        project_dirs().map(|p| p.data_dir().to_path_buf())
    }
}

fn project_dirs() -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from("com", "liphera", "liphera")
        .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
}

fn write_default(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CoreError::Config(format!("{} 디렉토리 생성 실패: {e}", parent.display()))
        })?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)
        .map_err(|e| CoreError::Config(format!("{} 기록 실패: {e}", path.display())))?;
    info!("기본 설정 파일 생성: {}", path.display());
    Ok(())
}
