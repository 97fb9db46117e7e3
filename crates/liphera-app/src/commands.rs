//! CLI 명령 처리.
//!
//! 설정 조회/변경/저장, 카탈로그 출력, 데모 실행.

use anyhow::{Context, Result};
use liphera_core::models::detection::CameraStatus;
use liphera_core::models::processing::ProcessingMode;
use liphera_core::models::settings::{SettingValue, SettingsField, SettingsRecord};
use liphera_core::models::voice::voice_catalog;
use liphera_demo::languages::{self, PackStatus, DEMO_LANGUAGES};
use liphera_demo::{DemoSession, DemoSnapshot};
use liphera_settings::SettingsController;
use std::fmt::Write as _;
use std::time::Duration;
use tokio::time;
use tracing::info;

/// 현재 설정 출력 (JSON + 표시 라벨)
pub fn settings_show(controller: &SettingsController) -> Result<()> {
    print!("{}", render_settings(controller.current())?);
    if controller.has_unsaved_changes() {
        println!("(저장되지 않은 변경 있음)");
    }
    Ok(())
}

/// 필드 하나 변경 후 저장
pub fn settings_set(controller: &mut SettingsController, field: &str, raw: &str) -> Result<()> {
    let field: SettingsField = field.parse()?;
    let value = SettingValue::parse_for(field, raw)?;
    controller.update(field, value)?;
    controller.save().context("설정 저장 실패")?;
    println!("✅ {} = {}", field.cli_name(), render_field(controller.current(), field));
    Ok(())
}

/// 기본값으로 초기화 (`save`가 참이면 저장까지)
pub fn settings_reset(controller: &mut SettingsController, save: bool) -> Result<()> {
    controller.reset_to_defaults();
    if save {
        controller.save().context("설정 저장 실패")?;
        println!("✅ 설정을 기본값으로 초기화하고 저장했습니다.");
    } else {
        println!("🔄 설정을 기본값으로 초기화했습니다 (저장하려면 --save).");
    }
    Ok(())
}

pub fn settings_export(controller: &SettingsController) -> Result<()> {
    let receipt = controller.export_settings().context("설정 내보내기 실패")?;
    match receipt.location {
        Some(path) => println!("📁 {} ({} bytes)", path.display(), receipt.bytes_written),
        None => println!("📁 {} ({} bytes)", receipt.file_name, receipt.bytes_written),
    }
    Ok(())
}

pub fn settings_clear(controller: &mut SettingsController) -> Result<()> {
    controller.clear_cache().context("저장된 설정 삭제 실패")?;
    println!("🗑️  저장된 설정을 삭제했습니다. 기본값이 적용됩니다.");
    Ok(())
}

pub fn render_settings(record: &SettingsRecord) -> Result<String> {
    let mut out = serde_json::to_string_pretty(record)?;
    out.push('\n');
    let voice = record.selected_voice_id.option();
    let _ = writeln!(out, "보이스: {} [{}]", voice.name, voice.accent);
    let _ = writeln!(
        out,
        "처리 모드: {} - {}",
        record.processing_mode.display_name(),
        record.processing_mode.description()
    );
    if !record.audio_enabled {
        let _ = writeln!(out, "오디오 출력 꺼짐: 음량/속도/음높이/자동 발화 비활성화");
    }
    Ok(out)
}

fn render_field(record: &SettingsRecord, field: SettingsField) -> String {
    match field {
        SettingsField::AudioEnabled => record.audio_enabled.to_string(),
        SettingsField::Volume => record.volume.to_string(),
        SettingsField::SpeechRate => record.speech_rate.to_string(),
        SettingsField::Pitch => record.pitch.to_string(),
        SettingsField::SelectedVoiceId => record.selected_voice_id.to_string(),
        SettingsField::AutoSpeech => record.auto_speech.to_string(),
        SettingsField::DarkMode => record.dark_mode.to_string(),
        SettingsField::Confidence => record.confidence.to_string(),
        SettingsField::ProcessingMode => record.processing_mode.to_string(),
    }
}

pub fn render_voices() -> String {
    let mut out = String::new();
    for voice in voice_catalog() {
        let _ = writeln!(out, "{:<8} {:<16} {}", voice.id.as_str(), voice.name, voice.accent);
    }
    out
}

pub fn render_modes() -> String {
    let mut out = String::new();
    for mode in ProcessingMode::ALL {
        let _ = writeln!(
            out,
            "{:<12} {:<12} {}",
            mode.as_str(),
            mode.display_name(),
            mode.description()
        );
    }
    out
}

pub fn render_languages() -> String {
    let mut out = String::from("데모 언어:\n");
    for lang in DEMO_LANGUAGES {
        let _ = writeln!(out, "  {:<6} {}", lang.code, lang.name);
    }

    out.push_str("\n언어 팩:\n");
    for pack in languages::language_packs() {
        let status = match pack.status {
            PackStatus::Installed => "설치됨".to_string(),
            PackStatus::Downloading { progress } => format!("다운로드 중 {progress}%"),
            PackStatus::Available => "설치 가능".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<6} {:<20} {:>4} MB  정확도 {}%  {:<7} {}",
            pack.code, pack.name, pack.size_mb, pack.accuracy_percent, pack.version, status
        );
    }
    let _ = writeln!(out, "\n설치된 용량: {} MB", languages::installed_size_mb());
    out
}

/// 데모 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub detections: u64,
    pub withheld: u64,
    pub camera_denied: bool,
}

/// 데모 실행 (`seconds` 경과 또는 Ctrl+C까지)
pub async fn run_demo(mut session: DemoSession, seconds: u64) -> Result<DemoSummary> {
    let mut rx = session.subscribe();

    if let CameraStatus::Denied(_) = session.start().await {
        println!("❌ {}", session.snapshot().detected_text);
        return Ok(DemoSummary {
            detections: 0,
            withheld: 0,
            camera_denied: true,
        });
    }
    println!("🎥 {}", session.snapshot().detected_text);

    let deadline = time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut printed = 0;
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = &mut ctrl_c => {
                info!("Ctrl+C 수신");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = rx.borrow_and_update().clone();
                if snap.detections > printed {
                    printed = snap.detections;
                    println!("{}", format_detection(&snap));
                }
            }
        }
    }

    let last = session.snapshot();
    session.stop().await;
    Ok(DemoSummary {
        detections: last.detections,
        withheld: last.withheld,
        camera_denied: false,
    })
}

fn format_detection(snap: &DemoSnapshot) -> String {
    match snap.confidence {
        Some(c) => format!("💬 [{}] {} ({c:.0}%)", snap.language, snap.detected_text),
        None => format!("💬 [{}] {}", snap.language, snap.detected_text),
    }
}
