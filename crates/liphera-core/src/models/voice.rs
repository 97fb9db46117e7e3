//! 음성 합성 보이스 카탈로그.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 선택 가능한 보이스 ID (고정 목록)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    /// Emma (여성, US)
    #[default]
    Female1,
    /// James (남성, US)
    Male1,
    /// Sofia (여성, UK)
    Female2,
    /// Oliver (남성, UK)
    Male2,
}

/// 보이스 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Female,
    Male,
}

/// UI 표시용 보이스 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    pub id: VoiceId,
    /// 표시 이름 (예: "Emma (Female)")
    pub name: &'static str,
    pub gender: VoiceGender,
    /// 억양 (US/UK)
    pub accent: &'static str,
}

impl VoiceId {
    /// 카탈로그 순서대로 모든 보이스
    pub const ALL: [VoiceId; 4] = [
        VoiceId::Female1,
        VoiceId::Male1,
        VoiceId::Female2,
        VoiceId::Male2,
    ];

    /// 저장 형식 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceId::Female1 => "female1",
            VoiceId::Male1 => "male1",
            VoiceId::Female2 => "female2",
            VoiceId::Male2 => "male2",
        }
    }

    /// 카탈로그 정보
    pub fn option(&self) -> VoiceOption {
        let (name, gender, accent) = match self {
            VoiceId::Female1 => ("Emma (Female)", VoiceGender::Female, "US"),
            VoiceId::Male1 => ("James (Male)", VoiceGender::Male, "US"),
            VoiceId::Female2 => ("Sofia (Female)", VoiceGender::Female, "UK"),
            VoiceId::Male2 => ("Oliver (Male)", VoiceGender::Male, "UK"),
        };
        VoiceOption {
            id: *self,
            name,
            gender,
            accent,
        }
    }
}

/// 전체 보이스 카탈로그
pub fn voice_catalog() -> Vec<VoiceOption> {
    VoiceId::ALL.iter().map(VoiceId::option).collect()
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceId::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::validation("selectedVoiceId", format!("알 수 없는 보이스: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_catalog_id() {
        for voice in VoiceId::ALL {
            assert_eq!(voice.as_str().parse::<VoiceId>().unwrap(), voice);
        }
    }

    #[test]
    fn rejects_unknown_id() {
        assert!("female3".parse::<VoiceId>().is_err());
        assert!("Female1".parse::<VoiceId>().is_err());
    }

    #[test]
    fn serde_uses_storage_ids() {
        let json = serde_json::to_string(&VoiceId::Male2).unwrap();
        assert_eq!(json, "\"male2\"");
    }

    #[test]
    fn catalog_matches_accents() {
        let catalog = voice_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].name, "Emma (Female)");
        assert_eq!(catalog[3].accent, "UK");
        assert_eq!(catalog[1].gender, VoiceGender::Male);
    }
}
