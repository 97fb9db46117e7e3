//! 설정 영속화 코덱.
//!
//! `SettingsRecord` ↔ 로컬 저장소 문자열, `SettingsRecord` → 내보내기 파일.
//! 저장 형식은 압축 JSON, 내보내기 형식은 들여쓰기 JSON이다.

use liphera_core::error::CoreError;
use liphera_core::models::settings::SettingsRecord;
use liphera_core::ports::exporter::{ExportReceipt, FileExporter};
use liphera_core::ports::key_value::KeyValueStore;
use liphera_core::schema;
use liphera_core::{SETTINGS_EXPORT_FILE_NAME, SETTINGS_STORAGE_KEY};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// 설정 코덱: 저장소 키 `liphera-settings` 하나만 다룬다
#[derive(Clone)]
pub struct SettingsCodec {
    store: Arc<dyn KeyValueStore>,
    exporter: Arc<dyn FileExporter>,
}

impl SettingsCodec {
    pub fn new(store: Arc<dyn KeyValueStore>, exporter: Arc<dyn FileExporter>) -> Self {
        Self { store, exporter }
    }

    /// 저장된 설정 로드
    ///
    /// 키가 없거나, 읽기 실패, 파싱 실패 시 기본값을 반환한다 (에러 없음).
    /// 파싱에 성공하면 필드별 검증을 거친다.
    pub fn load(&self) -> SettingsRecord {
        let raw = match self.store.get(SETTINGS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("저장된 설정 없음, 기본값 사용");
                return schema::defaults();
            }
            Err(e) => {
                warn!("설정 읽기 실패, 기본값 사용: {e}");
                return schema::defaults();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => schema::validate(&value),
            Err(e) => {
                warn!("설정 파싱 실패, 기본값 사용: {e}");
                schema::defaults()
            }
        }
    }

    /// 설정 저장 (기존 값 덮어쓰기)
    pub fn save(&self, record: &SettingsRecord) -> Result<(), CoreError> {
        let encoded = serde_json::to_string(record)?;
        self.store.set(SETTINGS_STORAGE_KEY, &encoded)?;
        debug!("설정 저장 완료 ({} bytes)", encoded.len());
        Ok(())
    }

    /// 설정을 `liphera-settings.json` 파일로 내보내기 (저장소 쓰기 없음)
    pub fn export_to_file(&self, record: &SettingsRecord) -> Result<ExportReceipt, CoreError> {
        let pretty = serde_json::to_string_pretty(record)?;
        self.exporter.export(SETTINGS_EXPORT_FILE_NAME, &pretty)
    }

    /// 저장된 설정 삭제. 이후 `load()`는 기본값을 반환한다.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.store.remove(SETTINGS_STORAGE_KEY)?;
        debug!("저장된 설정 삭제");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liphera_core::models::processing::ProcessingMode;
    use liphera_core::models::settings::{ConfidenceThreshold, Pitch, SpeechRate, Volume};
    use liphera_core::models::voice::VoiceId;
    use liphera_storage::{InMemoryExporter, InMemoryKeyValueStore};

    fn codec_with(
        store: InMemoryKeyValueStore,
    ) -> (
        SettingsCodec,
        Arc<InMemoryKeyValueStore>,
        Arc<InMemoryExporter>,
    ) {
        let store = Arc::new(store);
        let exporter = Arc::new(InMemoryExporter::new());
        let codec = SettingsCodec::new(store.clone(), exporter.clone());
        (codec, store, exporter)
    }

    fn sample_records() -> Vec<SettingsRecord> {
        vec![
            SettingsRecord::default(),
            SettingsRecord {
                audio_enabled: false,
                volume: Volume::new(0),
                speech_rate: SpeechRate::new(0.5),
                pitch: Pitch::new(2.0),
                selected_voice_id: VoiceId::Male1,
                auto_speech: false,
                dark_mode: true,
                confidence: ConfidenceThreshold::new(50),
                processing_mode: ProcessingMode::Performance,
            },
            SettingsRecord {
                volume: Volume::new(100),
                speech_rate: SpeechRate::new(1.3),
                pitch: Pitch::new(0.7),
                selected_voice_id: VoiceId::Female2,
                confidence: ConfidenceThreshold::new(95),
                processing_mode: ProcessingMode::Accuracy,
                ..SettingsRecord::default()
            },
        ]
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (codec, _, _) = codec_with(InMemoryKeyValueStore::new());
        for record in sample_records() {
            codec.save(&record).unwrap();
            assert_eq!(codec.load(), record);
        }
    }

    #[test]
    fn arbitrary_float_values_roundtrip_exactly() {
        let (codec, _, _) = codec_with(InMemoryKeyValueStore::new());
        // xorshift64, [0.5, 2.0) 구간의 임의 실수
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            0.5 + (state >> 11) as f64 / (1u64 << 53) as f64 * 1.5
        };

        for _ in 0..20_000 {
            let record = SettingsRecord {
                speech_rate: SpeechRate::new(next()),
                pitch: Pitch::new(next()),
                ..SettingsRecord::default()
            };
            codec.save(&record).unwrap();
            assert_eq!(codec.load(), record);
        }

        let known = SettingsRecord {
            speech_rate: SpeechRate::new(1.4071704091642139),
            ..SettingsRecord::default()
        };
        codec.save(&known).unwrap();
        assert_eq!(codec.load().speech_rate.get(), 1.4071704091642139);
    }

    #[test]
    fn saved_form_is_compact_json() {
        let (codec, store, _) = codec_with(InMemoryKeyValueStore::new());
        codec.save(&SettingsRecord::default()).unwrap();
        let raw = store.raw(SETTINGS_STORAGE_KEY).unwrap();
        assert!(!raw.contains('\n'));
        assert!(raw.contains("\"processingMode\":\"balanced\""));
    }

    #[test]
    fn missing_key_loads_defaults() {
        let (codec, store, _) = codec_with(InMemoryKeyValueStore::new());
        assert_eq!(codec.load(), schema::defaults());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn unparsable_text_loads_defaults() {
        let (codec, _, _) = codec_with(InMemoryKeyValueStore::seeded(
            SETTINGS_STORAGE_KEY,
            "{\"volume\": 40,",
        ));
        assert_eq!(codec.load(), schema::defaults());
    }

    #[test]
    fn corrupted_fields_are_replaced() {
        let (codec, _, _) = codec_with(InMemoryKeyValueStore::seeded(
            SETTINGS_STORAGE_KEY,
            r#"{"volume":[999],"processingMode":"turbo"}"#,
        ));
        let record = codec.load();
        assert_eq!(record.volume.get(), 75);
        assert_eq!(record.processing_mode, ProcessingMode::Balanced);
        assert_eq!(record, schema::defaults());
    }

    #[test]
    fn clear_then_load_is_defaults() {
        let (codec, store, _) = codec_with(InMemoryKeyValueStore::new());
        codec.save(&sample_records()[1]).unwrap();
        codec.clear().unwrap();
        assert_eq!(store.raw(SETTINGS_STORAGE_KEY), None);
        assert_eq!(codec.load(), schema::defaults());
    }

    #[test]
    fn export_is_indented_and_does_not_write_storage() {
        let (codec, store, exporter) = codec_with(InMemoryKeyValueStore::new());
        let record = sample_records()[2].clone();

        let receipt = codec.export_to_file(&record).unwrap();

        assert_eq!(receipt.file_name, "liphera-settings.json");
        assert_eq!(store.write_count(), 0);
        let file = exporter.last().unwrap();
        assert!(file.contents.contains("\n  \"volume\": 100"));
        let parsed: SettingsRecord = serde_json::from_str(&file.contents).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn storage_failure_is_returned() {
        let (codec, store, _) = codec_with(InMemoryKeyValueStore::new());
        store.set_read_only(true);
        let err = codec.save(&SettingsRecord::default()).unwrap_err();
        assert!(err.is_write_failure());
    }
}
