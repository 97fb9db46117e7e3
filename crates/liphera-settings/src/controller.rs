//! 설정 컨트롤러.
//!
//! 세션의 유일한 인메모리 `SettingsRecord`를 소유하고
//! UI 동작(변경/저장/초기화/내보내기/캐시 삭제)을 코덱에 연결한다.
//! 생성자가 곧 초기화이므로 "초기화 전" 상태는 존재하지 않는다.

use liphera_core::error::CoreError;
use liphera_core::models::settings::{SettingValue, SettingsField, SettingsRecord};
use liphera_core::ports::exporter::ExportReceipt;
use liphera_core::ports::notifier::UserNotifier;
use liphera_core::schema;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::codec::SettingsCodec;

/// 설정 컨트롤러
pub struct SettingsController {
    codec: SettingsCodec,
    notifier: Arc<dyn UserNotifier>,
    /// 편집 중인 설정
    current: SettingsRecord,
    /// 마지막으로 로드/저장한 설정
    persisted: SettingsRecord,
}

impl SettingsController {
    /// 세션 시작 시 한 번 호출. 저장된 설정(없으면 기본값)으로 시작한다.
    pub fn initialize(codec: SettingsCodec, notifier: Arc<dyn UserNotifier>) -> Self {
        let current = codec.load();
        info!(
            "설정 초기화: 처리 모드={}, 보이스={}",
            current.processing_mode, current.selected_voice_id
        );
        Self {
            codec,
            notifier,
            persisted: current.clone(),
            current,
        }
    }

    /// 현재 인메모리 설정
    pub fn current(&self) -> &SettingsRecord {
        &self.current
    }

    /// 오디오 관련 컨트롤(음량, 속도, 음높이, 자동 발화) 활성 여부
    pub fn audio_controls_enabled(&self) -> bool {
        self.current.audio_enabled
    }

    /// 저장되지 않은 변경이 있는지
    pub fn has_unsaved_changes(&self) -> bool {
        self.current != self.persisted
    }

    /// 필드 하나 변경 (저장하지 않음)
    ///
    /// 오디오 출력이 꺼져 있으면 오디오 컨트롤은 변경할 수 없고 값은 유지된다.
    pub fn update(&mut self, field: SettingsField, value: SettingValue) -> Result<(), CoreError> {
        if field.is_audio_control() && !self.audio_controls_enabled() {
            debug!("비활성화된 컨트롤 변경 무시: {field}");
            return Err(CoreError::ControlDisabled {
                field: field.key().to_string(),
            });
        }

        self.current.apply(field, value)?;
        debug!("설정 변경: {field}");
        Ok(())
    }

    /// 현재 설정 저장
    ///
    /// 실패하면 사용자에게 알리고 에러를 반환한다. 인메모리 상태는 그대로 유지된다.
    pub fn save(&mut self) -> Result<(), CoreError> {
        match self.codec.save(&self.current) {
            Ok(()) => {
                self.persisted = self.current.clone();
                info!("설정 저장 완료");
                Ok(())
            }
            Err(e) => {
                warn!("설정 저장 실패: {e}");
                self.notifier.show_notice(
                    "설정을 저장하지 못했습니다",
                    &format!("변경 내용은 이 세션에서 계속 사용할 수 있습니다. ({e})"),
                );
                Err(e)
            }
        }
    }

    /// 기본값으로 되돌리기 (인메모리만, 저장은 별도)
    pub fn reset_to_defaults(&mut self) {
        self.current = schema::defaults();
        debug!("설정 기본값으로 초기화 (미저장)");
    }

    /// 현재 설정을 파일로 내보내기
    pub fn export_settings(&self) -> Result<ExportReceipt, CoreError> {
        self.codec.export_to_file(&self.current).inspect_err(|e| {
            warn!("설정 내보내기 실패: {e}");
            self.notifier
                .show_notice("설정을 내보내지 못했습니다", &e.to_string());
        })
    }

    /// 저장된 설정 삭제 후 기본값으로 되돌리기
    ///
    /// 삭제에 실패해도 인메모리 상태는 기본값으로 돌아간다.
    pub fn clear_cache(&mut self) -> Result<(), CoreError> {
        let result = self.codec.clear();
        self.reset_to_defaults();

        match result {
            Ok(()) => {
                self.persisted = self.current.clone();
                info!("저장된 설정 삭제 완료");
                Ok(())
            }
            Err(e) => {
                warn!("저장된 설정 삭제 실패: {e}");
                self.notifier
                    .show_notice("저장된 설정을 삭제하지 못했습니다", &e.to_string());
                Err(e)
            }
        }
    }
}
