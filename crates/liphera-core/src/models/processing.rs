//! 처리 모드 (속도/정확도 프리셋).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 감지 속도와 정확도 사이의 프리셋
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// 빠른 처리, 낮은 정확도
    Performance,
    /// 속도와 정확도의 균형
    #[default]
    Balanced,
    /// 높은 정확도, 느린 처리
    Accuracy,
}

impl ProcessingMode {
    pub const ALL: [ProcessingMode; 3] = [
        ProcessingMode::Performance,
        ProcessingMode::Balanced,
        ProcessingMode::Accuracy,
    ];

    /// 저장 형식 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Performance => "performance",
            ProcessingMode::Balanced => "balanced",
            ProcessingMode::Accuracy => "accuracy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessingMode::Performance => "Performance",
            ProcessingMode::Balanced => "Balanced",
            ProcessingMode::Accuracy => "Accuracy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProcessingMode::Performance => "Faster processing, lower accuracy",
            ProcessingMode::Balanced => "Good balance of speed and accuracy",
            ProcessingMode::Accuracy => "Higher accuracy, slower processing",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessingMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::validation("processingMode", format!("알 수 없는 처리 모드: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_balanced() {
        assert_eq!(ProcessingMode::default(), ProcessingMode::Balanced);
    }

    #[test]
    fn parse_roundtrip_and_reject() {
        for mode in ProcessingMode::ALL {
            assert_eq!(mode.to_string().parse::<ProcessingMode>().unwrap(), mode);
        }
        assert!("turbo".parse::<ProcessingMode>().is_err());
    }
}
