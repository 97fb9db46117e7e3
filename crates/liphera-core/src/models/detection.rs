//! 립리딩 감지 결과 및 카메라 상태 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 감지된 텍스트 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// 감지된 문장
    pub text: String,
    /// 신뢰도 (0-100%)
    pub confidence: f32,
    /// 감지 시각
    pub detected_at: DateTime<Utc>,
}

impl Detection {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            detected_at: Utc::now(),
        }
    }

    /// 임계값(%) 이상인지
    pub fn meets_threshold(&self, threshold_percent: u8) -> bool {
        self.confidence >= threshold_percent as f32
    }
}

/// 카메라 캡처 요청 조건 (비디오 전용, 오디오 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConstraints {
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            audio: false,
        }
    }
}

/// 카메라 접근 상태
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum CameraStatus {
    /// 아직 요청하지 않음 또는 해제됨
    #[default]
    Idle,
    /// 권한 허용, 스트림 활성
    Granted,
    /// 권한 거부 (사유)
    Denied(String),
}
