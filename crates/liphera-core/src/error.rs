//! Liphera 핵심 에러 타입.
//!
//! 어댑터 crate는 별도 에러 타입 없이 `CoreError`를 그대로 반환한다.
//! 바이너리는 최상위에서 `anyhow`로 감싼다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 직렬화, 설정, 저장소, 유효성 검증, 미디어 접근 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정 파일 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 ({field}): {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 오디오 출력이 꺼져 있어 비활성화된 컨트롤
    #[error("비활성화된 컨트롤: {field} (오디오 출력이 꺼져 있음)")]
    ControlDisabled {
        /// 변경을 시도한 필드명
        field: String,
    },

    /// 알 수 없는 설정 필드
    #[error("알 수 없는 설정 필드: {0}")]
    UnknownField(String),

    /// 로컬 저장소 읽기/쓰기 실패
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 저장소 용량 초과
    #[error("저장소 용량 초과: {needed} bytes 필요, 한도 {limit} bytes")]
    QuotaExceeded {
        /// 기록하려던 크기 (bytes)
        needed: u64,
        /// 허용 한도 (bytes)
        limit: u64,
    },

    /// 파일 내보내기 실패
    #[error("내보내기 에러: {0}")]
    Export(String),

    /// 카메라 등 미디어 권한 거부
    #[error("권한 거부: {0}")]
    PermissionDenied(String),
}

impl CoreError {
    /// 유효성 검증 에러 생성 헬퍼
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 쓰기 실패 계열 에러인지 (사용자 알림 대상)
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::QuotaExceeded { .. } | Self::Export(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_includes_field() {
        let err = CoreError::validation("volume", "범위 초과");
        let msg = err.to_string();
        assert!(msg.contains("volume"));
        assert!(msg.contains("범위 초과"));
    }

    #[test]
    fn write_failures_are_classified() {
        assert!(CoreError::Storage("disk".into()).is_write_failure());
        assert!(CoreError::QuotaExceeded {
            needed: 10,
            limit: 5
        }
        .is_write_failure());
        assert!(!CoreError::UnknownField("x".into()).is_write_failure());
        assert!(!CoreError::PermissionDenied("camera".into()).is_write_failure());
        assert!(CoreError::Export("downloads".into()).is_write_failure());
    }
}
