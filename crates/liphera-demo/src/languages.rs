//! 언어 카탈로그.
//!
//! 데모에서 선택 가능한 감지 언어와, 다운로드 가능한 언어 팩 목록.

use serde::Serialize;

/// 데모 감지 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoLanguage {
    /// BCP 47 코드 (예: "en-US")
    pub code: &'static str,
    pub name: &'static str,
}

/// 데모에서 선택 가능한 언어 (첫 항목이 기본값)
pub const DEMO_LANGUAGES: [DemoLanguage; 4] = [
    DemoLanguage {
        code: "en-US",
        name: "English (US)",
    },
    DemoLanguage {
        code: "es-ES",
        name: "Spanish (Spain)",
    },
    DemoLanguage {
        code: "fr-FR",
        name: "French (France)",
    },
    DemoLanguage {
        code: "de-DE",
        name: "German (Germany)",
    },
];

/// 코드로 데모 언어 조회
pub fn find_demo_language(code: &str) -> Option<&'static DemoLanguage> {
    DEMO_LANGUAGES.iter().find(|l| l.code == code)
}

/// 언어 팩 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PackStatus {
    Installed,
    /// 다운로드 중 (진행률 %)
    Downloading { progress: u8 },
    Available,
}

/// 언어 팩 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagePack {
    pub name: &'static str,
    pub code: &'static str,
    pub size_mb: u32,
    /// 모델 정확도 (%)
    pub accuracy_percent: u8,
    #[serde(flatten)]
    pub status: PackStatus,
    pub version: &'static str,
}

impl LanguagePack {
    const fn new(
        name: &'static str,
        code: &'static str,
        size_mb: u32,
        accuracy_percent: u8,
        status: PackStatus,
        version: &'static str,
    ) -> Self {
        Self {
            name,
            code,
            size_mb,
            accuracy_percent,
            status,
            version,
        }
    }

    /// 설치됐거나 설치 중인 팩
    pub fn is_local(&self) -> bool {
        !matches!(self.status, PackStatus::Available)
    }
}

const LANGUAGE_PACKS: [LanguagePack; 10] = [
    LanguagePack::new("English (US)", "en-US", 245, 98, PackStatus::Installed, "v2.1.0"),
    LanguagePack::new("Spanish (Spain)", "es-ES", 189, 96, PackStatus::Installed, "v2.0.3"),
    LanguagePack::new(
        "French (France)",
        "fr-FR",
        201,
        95,
        PackStatus::Downloading { progress: 67 },
        "v2.1.1",
    ),
    LanguagePack::new("German (Germany)", "de-DE", 198, 97, PackStatus::Available, "v2.1.0"),
    LanguagePack::new("Italian (Italy)", "it-IT", 176, 94, PackStatus::Available, "v2.0.8"),
    LanguagePack::new("Portuguese (Brazil)", "pt-BR", 187, 93, PackStatus::Available, "v2.0.5"),
    LanguagePack::new("Japanese", "ja-JP", 234, 91, PackStatus::Available, "v1.9.2"),
    LanguagePack::new("Chinese (Mandarin)", "zh-CN", 267, 89, PackStatus::Available, "v1.8.7"),
    LanguagePack::new("Arabic", "ar-SA", 223, 87, PackStatus::Available, "v1.7.3"),
    LanguagePack::new("Korean", "ko-KR", 212, 90, PackStatus::Available, "v1.9.0"),
];

/// 전체 언어 팩 카탈로그
pub fn language_packs() -> &'static [LanguagePack] {
    &LANGUAGE_PACKS
}

/// 설치됐거나 다운로드 중인 팩
pub fn installed() -> Vec<&'static LanguagePack> {
    LANGUAGE_PACKS.iter().filter(|p| p.is_local()).collect()
}

/// 다운로드 가능한 팩
pub fn available() -> Vec<&'static LanguagePack> {
    LANGUAGE_PACKS.iter().filter(|p| !p.is_local()).collect()
}

/// 코드로 언어 팩 조회
pub fn find(code: &str) -> Option<&'static LanguagePack> {
    LANGUAGE_PACKS.iter().find(|p| p.code == code)
}

/// 설치 완료된 팩의 총 용량 (MB)
pub fn installed_size_mb() -> u32 {
    LANGUAGE_PACKS
        .iter()
        .filter(|p| p.status == PackStatus::Installed)
        .map(|p| p.size_mb)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_languages_have_packs() {
        for lang in DEMO_LANGUAGES {
            assert!(find(lang.code).is_some(), "{}", lang.code);
        }
        assert_eq!(DEMO_LANGUAGES[0].code, "en-US");
    }

    #[test]
    fn installed_and_available_partition_catalog() {
        assert_eq!(installed().len() + available().len(), language_packs().len());
        assert_eq!(installed().len(), 3);
        assert!(available().iter().all(|p| p.status == PackStatus::Available));
    }

    #[test]
    fn downloading_pack_reports_progress() {
        let fr = find("fr-FR").unwrap();
        assert_eq!(fr.status, PackStatus::Downloading { progress: 67 });
        assert!(fr.is_local());
    }

    #[test]
    fn installed_size_excludes_downloads() {
        assert_eq!(installed_size_mb(), 245 + 189);
    }

    #[test]
    fn unknown_codes() {
        assert!(find_demo_language("xx-XX").is_none());
        assert!(find_demo_language("it-IT").is_none());
        assert!(find("xx-XX").is_none());
    }

    #[test]
    fn pack_serializes_flat_status() {
        let json = serde_json::to_value(find("fr-FR").unwrap()).unwrap();
        assert_eq!(json["status"], "downloading");
        assert_eq!(json["progress"], 67);
    }
}
