//! # liphera-app
//!
//! Liphera 바이너리 진입점.
//! 설정 로드, 어댑터 와이어링, 명령 실행.

mod bootstrap;
mod commands;
mod notifier;

use anyhow::Result;
use clap::{Parser, Subcommand};
use liphera_core::models::settings::ConfidenceThreshold;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Liphera: 립리딩 보조 도구
///
/// 설정 관리와 시뮬레이션 데모
#[derive(Parser, Debug)]
#[command(name = "liphera")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 데이터 저장 경로 (기본: 플랫폼 데이터 디렉토리)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error). 미지정 시 설정 파일 값
    #[arg(long, short = 'l', global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 설정 조회 및 변경
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// 보이스 목록
    Voices,

    /// 처리 모드 목록
    Modes,

    /// 데모 언어 및 언어 팩 목록
    Languages,

    /// 시뮬레이션 립리딩 데모 실행
    Demo {
        /// 실행 시간 (초)
        #[arg(long, default_value = "15")]
        seconds: u64,

        /// 감지 언어 코드 (예: en-US)
        #[arg(long)]
        language: Option<String>,

        /// 카메라 권한 거부 시뮬레이션
        #[arg(long)]
        deny_camera: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// 현재 설정 출력
    Show,

    /// 필드 변경 후 저장 (예: `settings set volume 40`)
    Set { field: String, value: String },

    /// 기본값으로 초기화
    Reset {
        /// 초기화한 설정을 바로 저장
        #[arg(long)]
        save: bool,
    },

    /// 설정을 liphera-settings.json 파일로 내보내기
    Export {
        /// 내보낼 디렉토리 (기본: 다운로드 폴더)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// 저장된 설정 삭제
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = bootstrap::load_config(args.config.as_deref());
    let config = &loaded.config;

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_filter = format!(
        "liphera={level},liphera_app={level},liphera_core={level},liphera_storage={level},liphera_settings={level},liphera_demo={level}"
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // 설정 로드 결과는 subscriber 설치 후에 보고
    loaded.report();

    let data_dir = bootstrap::resolve_data_dir(args.data_dir.as_deref(), config);
    debug!("데이터 디렉토리: {}", data_dir.display());

    match args.command {
        Command::Voices => print!("{}", commands::render_voices()),
        Command::Modes => print!("{}", commands::render_modes()),
        Command::Languages => print!("{}", commands::render_languages()),
        Command::Settings(command) => {
            let out = match &command {
                SettingsCommand::Export { out } => out.as_deref(),
                _ => None,
            };
            let export_dir = bootstrap::resolve_export_dir(out, config, &data_dir);
            let mut controller =
                bootstrap::settings_controller(&data_dir, config.storage.quota_bytes, &export_dir)?;

            match command {
                SettingsCommand::Show => commands::settings_show(&controller)?,
                SettingsCommand::Set { field, value } => {
                    commands::settings_set(&mut controller, &field, &value)?
                }
                SettingsCommand::Reset { save } => commands::settings_reset(&mut controller, save)?,
                SettingsCommand::Export { .. } => commands::settings_export(&controller)?,
                SettingsCommand::Clear => commands::settings_clear(&mut controller)?,
            }
        }
        Command::Demo {
            seconds,
            language,
            deny_camera,
        } => {
            // 임계값만 설정에서 가져오고, 세션은 설정 컨트롤러와 상태를 공유하지 않는다
            let export_dir = bootstrap::resolve_export_dir(None, config, &data_dir);
            let threshold: ConfidenceThreshold =
                bootstrap::settings_controller(&data_dir, config.storage.quota_bytes, &export_dir)?
                    .current()
                    .confidence;

            let mut session = bootstrap::demo_session(&config.demo, threshold, deny_camera)?;
            if let Some(code) = language {
                session.select_language(&code)?;
            }

            info!("데모 시작 ({seconds}초, 임계값 {threshold}%)");
            let summary = commands::run_demo(session, seconds).await?;
            if !summary.camera_denied {
                println!(
                    "✅ 데모 종료: 감지 {}건, 임계값 미만 보류 {}건",
                    summary.detections, summary.withheld
                );
            }
        }
    }

    Ok(())
}
