//! 클라이언트 에러 타입.

use recruit_core::RecruitError;
use thiserror::Error;

/// REST 클라이언트 및 세션 관련 에러.
#[derive(Debug, Error)]
pub enum ClientError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 인증/권한 에러 (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// API 에러 응답
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    Parse(String),

    /// 토큰 저장소 에러
    #[error("Storage error: {0}")]
    Storage(String),

    /// 잘못된 입력
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 클라이언트 작업을 위한 Result 타입.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// 자격 증명 거부로 취급할 에러인지 확인합니다.
    ///
    /// `fetch_me`의 무음 강등 경로에서 사용자에게 노출하지 않고
    /// 세션을 초기화할지 판단하는 데 쓰입니다.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized(_)
                | ClientError::ApiError { status: 401, .. }
                | ClientError::ApiError { status: 403, .. }
        )
    }
}

impl From<ClientError> for RecruitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(msg) => RecruitError::Network(msg),
            ClientError::Unauthorized(msg) => RecruitError::Auth(msg),
            ClientError::ApiError { status: 404, message } => RecruitError::NotFound(message),
            ClientError::ApiError { status, message } => {
                RecruitError::Network(format!("API error {}: {}", status, message))
            }
            ClientError::Parse(msg) => RecruitError::Serialization(msg),
            ClientError::Storage(msg) => RecruitError::Storage(msg),
            ClientError::InvalidInput(msg) => RecruitError::InvalidInput(msg),
        }
    }
}
