//! 설정 스키마: 기본값과 필드별 검증.
//!
//! 저장소에서 읽은 JSON은 필드 단위로 검증한다. 한 필드가 손상되어도
//! 그 필드만 기본값으로 대체하고 나머지는 유지한다. 검증은 실패하지 않는다.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::processing::ProcessingMode;
use crate::models::settings::{
    ConfidenceThreshold, Pitch, SettingsField, SettingsRecord, SpeechRate, Volume,
};
use crate::models::voice::VoiceId;

/// 기본 설정 레코드
pub fn defaults() -> SettingsRecord {
    SettingsRecord::default()
}

/// JSON 후보를 완전히 유효한 레코드로 변환
///
/// 객체가 아니면 전체 기본값을 반환한다.
pub fn validate(candidate: &Value) -> SettingsRecord {
    let defaults = defaults();
    let Some(obj) = candidate.as_object() else {
        debug!("설정 후보가 객체가 아님, 기본값 사용");
        return defaults;
    };

    SettingsRecord {
        audio_enabled: extract(obj, SettingsField::AudioEnabled, Value::as_bool)
            .unwrap_or(defaults.audio_enabled),
        volume: extract(obj, SettingsField::Volume, |v| {
            whole_number(v).and_then(Volume::try_new)
        })
        .unwrap_or(defaults.volume),
        speech_rate: extract(obj, SettingsField::SpeechRate, |v| {
            number(v).and_then(SpeechRate::try_new)
        })
        .unwrap_or(defaults.speech_rate),
        pitch: extract(obj, SettingsField::Pitch, |v| number(v).and_then(Pitch::try_new))
            .unwrap_or(defaults.pitch),
        selected_voice_id: extract(obj, SettingsField::SelectedVoiceId, |v| {
            v.as_str().and_then(|s| s.parse::<VoiceId>().ok())
        })
        .unwrap_or(defaults.selected_voice_id),
        auto_speech: extract(obj, SettingsField::AutoSpeech, Value::as_bool)
            .unwrap_or(defaults.auto_speech),
        dark_mode: extract(obj, SettingsField::DarkMode, Value::as_bool)
            .unwrap_or(defaults.dark_mode),
        confidence: extract(obj, SettingsField::Confidence, |v| {
            whole_number(v).and_then(ConfidenceThreshold::try_new)
        })
        .unwrap_or(defaults.confidence),
        processing_mode: extract(obj, SettingsField::ProcessingMode, |v| {
            v.as_str().and_then(|s| s.parse::<ProcessingMode>().ok())
        })
        .unwrap_or(defaults.processing_mode),
    }
}

/// 필드가 있으면 변환, 변환 실패 시 진단 로그
fn extract<T>(
    obj: &Map<String, Value>,
    field: SettingsField,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let raw = obj.get(field.key())?;
    let converted = convert(raw);
    if converted.is_none() {
        debug!("손상된 설정 필드, 기본값으로 대체: {}={}", field.key(), raw);
    }
    converted
}

/// 숫자 값. 슬라이더 인코딩(`[75]`)도 허용한다.
fn number(value: &Value) -> Option<f64> {
    let value = match value {
        Value::Array(items) if items.len() == 1 => &items[0],
        other => other,
    };
    value.as_f64().filter(|x| x.is_finite())
}

/// 정수 값 (소수부가 없는 숫자만)
fn whole_number(value: &Value) -> Option<i64> {
    number(value).filter(|x| x.fract() == 0.0).map(|x| x as i64)
}
