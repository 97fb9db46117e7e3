//! # liphera-core
//!
//! Liphera 도메인 모델, 설정 스키마, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 설정 레코드, 보이스/처리 모드 카탈로그, 감지 결과
//! - [`schema`]: 설정 기본값과 필드별 검증
//! - [`ports`]: 저장소/내보내기/알림/카메라/립리더 포트
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체
//! - [`config_manager`]: 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
pub mod schema;

/// 설정 레코드가 저장되는 유일한 키
pub const SETTINGS_STORAGE_KEY: &str = "liphera-settings";

/// 설정 내보내기 파일 이름
pub const SETTINGS_EXPORT_FILE_NAME: &str = "liphera-settings.json";

#[cfg(test)]
mod tests {
    use crate::models::settings::SettingsRecord;

    #[test]
    fn settings_serde_roundtrip() {
        let record = SettingsRecord::default();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: SettingsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn export_file_name_derives_from_key() {
        assert_eq!(
            crate::SETTINGS_EXPORT_FILE_NAME,
            format!("{}.json", crate::SETTINGS_STORAGE_KEY)
        );
    }
}
