//! Recruit Flow 클라이언트의 에러 타입.
//!
//! 이 모듈은 클라이언트 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 클라이언트 에러.
#[derive(Debug, Error)]
pub enum RecruitError {
    /// 설정 에러
    #[error("Config error: {0}")]
    Config(String),

    /// 인증 에러
    #[error("Auth error: {0}")]
    Auth(String),

    /// 네트워크 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 토큰 저장소 에러
    #[error("Storage error: {0}")]
    Storage(String),

    /// 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 잘못된 입력
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 클라이언트 작업을 위한 Result 타입.
pub type RecruitResult<T> = Result<T, RecruitError>;

impl From<config::ConfigError> for RecruitError {
    fn from(err: config::ConfigError) -> Self {
        RecruitError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RecruitError {
    fn from(err: serde_json::Error) -> Self {
        RecruitError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecruitError::Auth("token rejected".to_string());
        assert_eq!(err.to_string(), "Auth error: token rejected");
    }
}
