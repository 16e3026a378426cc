//! Recruit Flow REST API 클라이언트.
//!
//! 영역별 엔드포인트는 하위 모듈로 분리되어 있습니다:
//! - [`auth`]: 로그인 / 회원가입 / 내 정보
//! - [`public`]: 공개 공고 목록 / 상세 / 헬스체크
//! - [`candidate`]: 지원자 프로필 / 지원서
//! - [`recruiter`]: 채용 담당자 공고 / 지원서 관리
//!
//! 모든 요청은 `set_bearer`로 등록된 토큰을 `Authorization` 헤더에
//! 자동으로 첨부합니다. 토큰 등록은 [`crate::SessionStore`]만 수행합니다.

pub mod auth;
pub mod candidate;
pub mod public;
pub mod recruiter;

pub use public::HealthStatus;
pub use recruiter::RecruiterJobDetail;

use crate::error::{ClientError, ClientResult};
use recruit_core::ApiConfig;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// FastAPI 에러 응답 본문.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

/// 타입 기반 REST API 클라이언트.
///
/// `Clone`이 저렴하도록 내부 상태를 `Arc`로 공유합니다.
/// 동일한 클라이언트를 복제해 쓰는 모든 곳에서 같은 Bearer 토큰이
/// 적용됩니다.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// 새 API 클라이언트 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ClientError::Network`를 반환합니다.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            bearer: Arc::new(RwLock::new(None)),
        })
    }

    /// 설정에서 API 클라이언트 생성.
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::new(config.base_url.clone(), config.timeout_secs)
    }

    /// API 기본 URL 반환.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 기본 Authorization 헤더에 사용할 Bearer 토큰 설정.
    ///
    /// `None`이면 헤더가 제거됩니다. 이후의 모든 요청에 적용됩니다.
    pub async fn set_bearer(&self, token: Option<&str>) {
        let mut bearer = self.bearer.write().await;
        *bearer = token.map(|t| t.to_string());
    }

    /// 현재 설정된 Bearer 토큰 반환.
    pub async fn bearer(&self) -> Option<String> {
        self.bearer.read().await.clone()
    }

    /// 요청 빌더 생성 (토큰이 있으면 Authorization 헤더 첨부).
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.bearer.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// GET 요청 후 JSON 역직렬화.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .request(Method::GET, path)
            .await
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(path, response).await
    }

    /// JSON 본문과 함께 요청 후 JSON 역직렬화.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(method, path)
            .await
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(path, response).await
    }

    /// multipart 폼과 함께 POST 요청 후 JSON 역직렬화.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .request(Method::POST, path)
            .await
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(path, response).await
    }

    /// 응답 상태 검사 및 본문 역직렬화.
    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> ClientResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Request to {} failed: {} - {}", path, status, body);
            return Err(Self::error_from_response(status.as_u16(), &body));
        }

        debug!("Response from {}: {} bytes", path, body.len());

        serde_json::from_str(&body).map_err(|e| {
            ClientError::Parse(format!("Failed to parse response from {}: {}", path, e))
        })
    }

    /// 실패 응답을 에러로 변환.
    ///
    /// FastAPI의 `{"detail": ...}` 본문에서 메시지를 추출하되,
    /// 내용 자체는 해석하지 않고 그대로 전달합니다.
    fn error_from_response(status: u16, body: &str) -> ClientError {
        let message = serde_json::from_str::<ErrorDetail>(body)
            .map(|e| match e.detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|_| body.to_string());

        match status {
            401 | 403 => ClientError::Unauthorized(message),
            _ => ClientError::ApiError { status, message },
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 토큰은 출력하지 않음
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
