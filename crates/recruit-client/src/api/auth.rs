//! 인증 엔드포인트.
//!
//! - `POST /auth/login`
//! - `POST /auth/register`
//! - `GET /auth/me`

use super::ApiClient;
use crate::error::ClientResult;
use recruit_core::{LoginRequest, RegisterRequest, TokenResponse, User};
use reqwest::Method;
use tracing::debug;

impl ApiClient {
    /// 로그인 후 접근 토큰을 발급받습니다.
    ///
    /// 토큰을 세션에 적용하지는 않습니다. 그 책임은
    /// [`crate::SessionStore::login`]에 있습니다.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<TokenResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        debug!("Logging in as {}", email);
        self.send_json(Method::POST, "/auth/login", &body).await
    }

    /// 회원가입.
    ///
    /// 백엔드는 생성된 사용자를 반환하지만 세션은 만들지 않습니다.
    pub async fn register(&self, payload: &RegisterRequest) -> ClientResult<User> {
        debug!("Registering {} as {}", payload.email, payload.role);
        self.send_json(Method::POST, "/auth/register", payload).await
    }

    /// 현재 토큰이 가리키는 사용자 조회.
    pub async fn me(&self) -> ClientResult<User> {
        self.get_json("/auth/me").await
    }
}
