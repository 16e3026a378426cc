//! Recruit Flow 백엔드 연동 및 세션 관리.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - ApiClient: Bearer 토큰이 적용되는 타입 기반 REST 클라이언트
//! - SessionStore: 로그인/가입/로그아웃 및 토큰 수명 주기 관리
//! - TokenStore trait: 토큰 영속화 (파일/메모리)
//! - NavigationGuard: 경로 메타데이터 기반 접근 제어
//! - RouteTable: 정적 경로 테이블

pub mod api;
pub mod error;
pub mod guard;
pub mod routes;
pub mod session;
pub mod storage;

pub use api::{ApiClient, HealthStatus, RecruiterJobDetail};
pub use error::{ClientError, ClientResult};
pub use guard::{GuardDecision, NavigationGuard};
pub use routes::{
    Route, RouteMeta, RouteTable, CANDIDATE_HOME, CANDIDATE_LOGIN, RECRUITER_HOME,
    RECRUITER_LOGIN,
};
pub use session::SessionStore;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
