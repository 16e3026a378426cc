//! 사용자 및 인증 관련 타입.
//!
//! 백엔드의 `UserRead` / `UserCreate` / `TokenResponse` 스키마에 대응합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 사용자 역할.
///
/// 백엔드는 회원가입 시 세 가지 역할만 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 지원자
    Candidate,
    /// 채용 담당자
    Recruiter,
    /// 관리자
    Admin,
}

impl Role {
    /// 역할 문자열 반환 (API 와이어 포맷).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// 문자열에서 파싱.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "candidate" => Some(Role::Candidate),
            "recruiter" => Some(Role::Recruiter),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| format!("Unknown role: {}", s))
    }
}

/// 사용자 정보.
///
/// `GET /auth/me` 및 프로필 조회 응답에 대응합니다.
/// 클라이언트 입장에서는 재조회 외에는 불변입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 ID
    pub id: i64,
    /// 이메일
    pub email: String,
    /// 이름
    #[serde(default)]
    pub full_name: Option<String>,
    /// 역할
    pub role: Role,
    /// 전화번호
    #[serde(default)]
    pub phone: Option<String>,
    /// 거주 지역
    #[serde(default)]
    pub location: Option<String>,
    /// 자기소개
    #[serde(default)]
    pub bio: Option<String>,
    /// 가입 시각
    pub created_at: DateTime<Utc>,
}

/// 로그인 요청 본문 (`POST /auth/login`).
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// 이메일
    pub email: String,
    /// 비밀번호
    pub password: String,
}

/// 로그인 응답 (`POST /auth/login`).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer 접근 토큰
    pub access_token: String,
    /// 로그인한 사용자의 역할
    pub role: Role,
    /// 이름
    #[serde(default)]
    pub full_name: Option<String>,
}

/// 회원가입 요청 본문 (`POST /auth/register`).
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// 이메일
    pub email: String,
    /// 비밀번호
    pub password: String,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 거주 지역
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 역할
    pub role: Role,
}

impl RegisterRequest {
    /// 필수 필드만으로 요청 생성.
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: None,
            phone: None,
            location: None,
            role,
        }
    }

    /// 이름 설정.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// 전화번호 설정.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// 거주 지역 설정.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// 프로필 수정 요청 본문 (`PATCH /candidate/profile`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 거주 지역
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 자기소개
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
