//! 사용자 설정 레코드.
//!
//! 숫자 필드는 범위가 고정된 newtype이라 범위 밖 값을 담을 수 없다.
//! `new`는 범위 안으로 클램프하고, `try_new`는 범위 밖이면 `None`을 반환한다.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::processing::ProcessingMode;
use super::voice::VoiceId;
use crate::error::CoreError;

macro_rules! ranged_int {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u8);

        impl $name {
            pub const MIN: u8 = $min;
            pub const MAX: u8 = $max;
            pub const DEFAULT: Self = Self($default);

            /// 범위 안으로 클램프
            pub fn new(value: i64) -> Self {
                Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
            }

            /// 범위 밖이면 `None`
            pub fn try_new(value: i64) -> Option<Self> {
                (Self::MIN as i64..=Self::MAX as i64)
                    .contains(&value)
                    .then(|| Self(value as u8))
            }

            pub fn get(self) -> u8 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                i64::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

macro_rules! ranged_float {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;
            pub const DEFAULT: Self = Self($default);

            /// 범위 안으로 클램프 (NaN은 기본값)
            pub fn new(value: f64) -> Self {
                if value.is_nan() {
                    return Self::DEFAULT;
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            /// 범위 밖이거나 유한하지 않으면 `None`
            pub fn try_new(value: f64) -> Option<Self> {
                (value.is_finite() && (Self::MIN..=Self::MAX).contains(&value))
                    .then_some(Self(value))
            }

            pub fn get(self) -> f64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.1}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                f64::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

ranged_int!(
    /// 음량 (0-100%)
    Volume, 0, 100, 75
);

ranged_int!(
    /// 신뢰도 임계값 (50-95%). 이 값 미만의 감지 결과는 표시하지 않는다.
    ConfidenceThreshold, 50, 95, 80
);

ranged_float!(
    /// 말하기 속도 배율 (0.5x-2.0x)
    SpeechRate, 0.5, 2.0, 1.0
);

ranged_float!(
    /// 음높이 (0.5-2.0)
    Pitch, 0.5, 2.0, 1.0
);

/// 저장되는 유일한 사용자 설정 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// 음성 출력 활성화
    pub audio_enabled: bool,
    pub volume: Volume,
    pub speech_rate: SpeechRate,
    pub pitch: Pitch,
    pub selected_voice_id: VoiceId,
    /// 감지된 텍스트 자동 발화
    pub auto_speech: bool,
    pub dark_mode: bool,
    pub confidence: ConfidenceThreshold,
    pub processing_mode: ProcessingMode,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            volume: Volume::DEFAULT,
            speech_rate: SpeechRate::DEFAULT,
            pitch: Pitch::DEFAULT,
            selected_voice_id: VoiceId::default(),
            auto_speech: true,
            dark_mode: false,
            confidence: ConfidenceThreshold::DEFAULT,
            processing_mode: ProcessingMode::default(),
        }
    }
}

/// 설정 필드 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    AudioEnabled,
    Volume,
    SpeechRate,
    Pitch,
    SelectedVoiceId,
    AutoSpeech,
    DarkMode,
    Confidence,
    ProcessingMode,
}

impl SettingsField {
    pub const ALL: [SettingsField; 9] = [
        SettingsField::AudioEnabled,
        SettingsField::Volume,
        SettingsField::SpeechRate,
        SettingsField::Pitch,
        SettingsField::SelectedVoiceId,
        SettingsField::AutoSpeech,
        SettingsField::DarkMode,
        SettingsField::Confidence,
        SettingsField::ProcessingMode,
    ];

    /// 저장 형식의 JSON 키
    pub fn key(&self) -> &'static str {
        match self {
            SettingsField::AudioEnabled => "audioEnabled",
            SettingsField::Volume => "volume",
            SettingsField::SpeechRate => "speechRate",
            SettingsField::Pitch => "pitch",
            SettingsField::SelectedVoiceId => "selectedVoiceId",
            SettingsField::AutoSpeech => "autoSpeech",
            SettingsField::DarkMode => "darkMode",
            SettingsField::Confidence => "confidence",
            SettingsField::ProcessingMode => "processingMode",
        }
    }

    /// CLI용 kebab-case 이름
    pub fn cli_name(&self) -> &'static str {
        match self {
            SettingsField::AudioEnabled => "audio-enabled",
            SettingsField::Volume => "volume",
            SettingsField::SpeechRate => "speech-rate",
            SettingsField::Pitch => "pitch",
            SettingsField::SelectedVoiceId => "voice",
            SettingsField::AutoSpeech => "auto-speech",
            SettingsField::DarkMode => "dark-mode",
            SettingsField::Confidence => "confidence",
            SettingsField::ProcessingMode => "processing-mode",
        }
    }

    /// 오디오 출력이 꺼지면 비활성화되는 컨트롤
    pub fn is_audio_control(&self) -> bool {
        matches!(
            self,
            SettingsField::Volume
                | SettingsField::SpeechRate
                | SettingsField::Pitch
                | SettingsField::AutoSpeech
        )
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingsField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsField::ALL
            .into_iter()
            .find(|f| f.key() == s || f.cli_name() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// 단일 필드에 적용할 값
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl SettingValue {
    /// 문자열 입력을 필드 타입에 맞게 해석 (CLI 입력용)
    pub fn parse_for(field: SettingsField, raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        match field {
            SettingsField::AudioEnabled | SettingsField::AutoSpeech | SettingsField::DarkMode => {
                match raw.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => Ok(SettingValue::Bool(true)),
                    "false" | "off" | "no" | "0" => Ok(SettingValue::Bool(false)),
                    _ => Err(CoreError::validation(field.key(), format!("불리언 값이 아님: {raw}"))),
                }
            }
            SettingsField::Volume
            | SettingsField::Confidence
            | SettingsField::SpeechRate
            | SettingsField::Pitch => {
                if let Ok(n) = raw.parse::<i64>() {
                    return Ok(SettingValue::Integer(n));
                }
                raw.parse::<f64>()
                    .map(SettingValue::Number)
                    .map_err(|_| CoreError::validation(field.key(), format!("숫자가 아님: {raw}")))
            }
            SettingsField::SelectedVoiceId | SettingsField::ProcessingMode => {
                Ok(SettingValue::Text(raw.to_string()))
            }
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Integer(n) => Some(*n as f64),
            SettingValue::Number(x) if x.is_finite() => Some(*x),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(n) => Some(*n),
            SettingValue::Number(x) if x.is_finite() => Some(x.round() as i64),
            _ => None,
        }
    }
}

impl SettingsRecord {
    /// 필드 하나를 변경한다. 숫자는 범위 안으로 클램프하고,
    /// 열거형에 없는 문자열이나 타입이 맞지 않는 값은 거부한다.
    pub fn apply(&mut self, field: SettingsField, value: SettingValue) -> Result<(), CoreError> {
        let mismatch = |expected: &str| {
            CoreError::validation(field.key(), format!("{expected} 값이 필요합니다"))
        };

        match field {
            SettingsField::AudioEnabled => match value {
                SettingValue::Bool(b) => self.audio_enabled = b,
                _ => return Err(mismatch("불리언")),
            },
            SettingsField::AutoSpeech => match value {
                SettingValue::Bool(b) => self.auto_speech = b,
                _ => return Err(mismatch("불리언")),
            },
            SettingsField::DarkMode => match value {
                SettingValue::Bool(b) => self.dark_mode = b,
                _ => return Err(mismatch("불리언")),
            },
            SettingsField::Volume => {
                let n = value.as_i64().ok_or_else(|| mismatch("정수"))?;
                self.volume = Volume::new(n);
            }
            SettingsField::Confidence => {
                let n = value.as_i64().ok_or_else(|| mismatch("정수"))?;
                self.confidence = ConfidenceThreshold::new(n);
            }
            SettingsField::SpeechRate => {
                let x = value.as_f64().ok_or_else(|| mismatch("숫자"))?;
                self.speech_rate = SpeechRate::new(x);
            }
            SettingsField::Pitch => {
                let x = value.as_f64().ok_or_else(|| mismatch("숫자"))?;
                self.pitch = Pitch::new(x);
            }
            SettingsField::SelectedVoiceId => match value {
                SettingValue::Text(s) => self.selected_voice_id = s.parse()?,
                _ => return Err(mismatch("문자열")),
            },
            SettingsField::ProcessingMode => match value {
                SettingValue::Text(s) => self.processing_mode = s.parse()?,
                _ => return Err(mismatch("문자열")),
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn ranged_values_clamp() {
        assert_eq!(Volume::new(999).get(), 100);
        assert_eq!(Volume::new(-3).get(), 0);
        assert_eq!(ConfidenceThreshold::new(999).get(), 95);
        assert_eq!(ConfidenceThreshold::new(10).get(), 50);
        assert_eq!(SpeechRate::new(5.0).get(), 2.0);
        assert_eq!(Pitch::new(0.1).get(), 0.5);
        assert_eq!(Pitch::new(f64::NAN), Pitch::DEFAULT);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Volume::try_new(101).is_none());
        assert_eq!(Volume::try_new(100).map(Volume::get), Some(100));
        assert!(ConfidenceThreshold::try_new(49).is_none());
        assert!(SpeechRate::try_new(f64::INFINITY).is_none());
        assert!(SpeechRate::try_new(2.01).is_none());
        assert!(SpeechRate::try_new(0.5).is_some());
    }

    #[test]
    fn record_serializes_with_storage_keys() {
        let json = serde_json::to_value(SettingsRecord::default()).unwrap();
        for field in SettingsField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field.key());
        }
        assert_eq!(json["volume"], 75);
        assert_eq!(json["processingMode"], "balanced");
        assert_eq!(json["selectedVoiceId"], "female1");
    }

    #[test]
    fn field_parses_json_and_cli_names() {
        assert_eq!("speechRate".parse::<SettingsField>().unwrap(), SettingsField::SpeechRate);
        assert_eq!("speech-rate".parse::<SettingsField>().unwrap(), SettingsField::SpeechRate);
        assert_eq!("voice".parse::<SettingsField>().unwrap(), SettingsField::SelectedVoiceId);
        assert_matches!("loudness".parse::<SettingsField>(), Err(CoreError::UnknownField(_)));
    }

    #[test]
    fn apply_clamps_numbers() {
        let mut record = SettingsRecord::default();
        record
            .apply(SettingsField::Confidence, SettingValue::Integer(999))
            .unwrap();
        assert_eq!(record.confidence.get(), 95);

        record
            .apply(SettingsField::SpeechRate, SettingValue::Number(1.5))
            .unwrap();
        assert_eq!(record.speech_rate.get(), 1.5);

        record.apply(SettingsField::Volume, SettingValue::Number(42.6)).unwrap();
        assert_eq!(record.volume.get(), 43);
    }

    #[test]
    fn apply_rejects_unknown_enum_and_wrong_kind() {
        let mut record = SettingsRecord::default();
        assert_matches!(
            record.apply(SettingsField::ProcessingMode, SettingValue::Text("turbo".into())),
            Err(CoreError::Validation { .. })
        );
        assert_matches!(
            record.apply(SettingsField::DarkMode, SettingValue::Integer(1)),
            Err(CoreError::Validation { .. })
        );
        assert_matches!(
            record.apply(SettingsField::Volume, SettingValue::Number(f64::NAN)),
            Err(CoreError::Validation { .. })
        );
        assert_eq!(record, SettingsRecord::default());
    }

    #[test]
    fn parse_for_cli_input() {
        assert_eq!(
            SettingValue::parse_for(SettingsField::DarkMode, "on").unwrap(),
            SettingValue::Bool(true)
        );
        assert_eq!(
            SettingValue::parse_for(SettingsField::Volume, "60").unwrap(),
            SettingValue::Integer(60)
        );
        assert_eq!(
            SettingValue::parse_for(SettingsField::Pitch, "1.2").unwrap(),
            SettingValue::Number(1.2)
        );
        assert!(SettingValue::parse_for(SettingsField::AutoSpeech, "maybe").is_err());
        assert!(SettingValue::parse_for(SettingsField::Volume, "loud").is_err());
    }

    #[test]
    fn audio_controls() {
        let audio: Vec<_> = SettingsField::ALL
            .into_iter()
            .filter(SettingsField::is_audio_control)
            .collect();
        assert_eq!(
            audio,
            vec![
                SettingsField::Volume,
                SettingsField::SpeechRate,
                SettingsField::Pitch,
                SettingsField::AutoSpeech
            ]
        );
    }
}
