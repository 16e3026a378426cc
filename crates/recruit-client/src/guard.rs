//! 내비게이션 가드.
//!
//! 모든 내비게이션 시도에 대해 (목적지 메타데이터, 현재 세션 상태)의
//! 순수 함수로 허용/리다이렉트를 결정합니다. 판단 전에 필요하면
//! 지연 하이드레이션을 먼저 수행하므로, 어떤 내비게이션도 덜 채워진
//! 세션으로 확정되지 않습니다.

use crate::routes::{home_for, login_for, RouteMeta, RouteTable};
use crate::session::SessionStore;
use std::sync::Arc;
use tracing::debug;

/// 가드의 결정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 내비게이션 허용
    Allow,
    /// 다른 경로로 대체 (에러가 아님)
    Redirect(String),
}

impl GuardDecision {
    fn redirect(path: &str) -> Self {
        GuardDecision::Redirect(path.to_string())
    }
}

/// 내비게이션 가드.
///
/// 세션 저장소를 주입받아 모든 판단에 사용합니다. 경로 테이블은
/// 시작 시 한 번 만들어 공유합니다.
pub struct NavigationGuard {
    session: Arc<SessionStore>,
    table: RouteTable,
}

impl NavigationGuard {
    /// 기본 경로 테이블을 사용하는 가드 생성.
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self::with_table(session, RouteTable::new())
    }

    /// 주어진 경로 테이블을 사용하는 가드 생성.
    pub fn with_table(session: Arc<SessionStore>, table: RouteTable) -> Self {
        Self { session, table }
    }

    /// 경로 테이블 참조 반환.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// 경로 문자열에 대한 가드 판정.
    ///
    /// 테이블에 없는 경로는 메타데이터 없는 경로로 취급되어 항상
    /// 허용됩니다 (SPA의 catch-all과 동일).
    pub async fn resolve(&self, path: &str) -> GuardDecision {
        let meta = self
            .table
            .find(path)
            .map(|route| route.meta)
            .unwrap_or_default();
        self.check(&meta).await
    }

    /// 목적지 메타데이터에 대한 가드 판정.
    ///
    /// 고정된 순서로 평가합니다:
    /// 1. 토큰만 있고 사용자가 없으면 먼저 하이드레이션을 기다린다.
    /// 2. 인증 필요 + 미인증 → 요구 역할의 로그인 페이지로.
    /// 3. 역할 불일치 (인증됨) → 실제 역할의 홈으로.
    /// 4. 비로그인 전용 페이지 + 인증됨 → 실제 역할의 홈으로.
    /// 5. 그 외에는 허용.
    ///
    /// 3/4번은 2번을 통과한 뒤에만 검사되므로, 역할이 다른 인증
    /// 사용자는 항상 자기 홈으로 보내지며 로그인 루프에 빠지지
    /// 않습니다.
    pub async fn check(&self, meta: &RouteMeta) -> GuardDecision {
        // 1. 지연 하이드레이션
        if self.session.token().await.is_some() && self.session.current_user().await.is_none() {
            self.session.ensure_user().await;
        }

        let authenticated = self.session.is_authenticated().await;
        let actual_role = self.session.role().await;

        // 2. 인증 필요
        if meta.requires_auth && !authenticated {
            let target = login_for(meta.role);
            debug!("Navigation requires auth, redirecting to {}", target);
            return GuardDecision::redirect(target);
        }

        // 3. 역할 불일치
        if let (Some(required), Some(actual)) = (meta.role, actual_role) {
            if authenticated && required != actual {
                let target = home_for(actual);
                debug!(
                    "Role mismatch (required {}, actual {}), redirecting to {}",
                    required, actual, target
                );
                return GuardDecision::redirect(target);
            }
        }

        // 4. 비로그인 전용 페이지
        if meta.auth_page && authenticated {
            let target = actual_role.map(home_for).unwrap_or(crate::routes::CANDIDATE_HOME);
            debug!("Auth page while authenticated, redirecting to {}", target);
            return GuardDecision::redirect(target);
        }

        // 5. 허용
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::routes::{CANDIDATE_HOME, CANDIDATE_LOGIN, RECRUITER_HOME, RECRUITER_LOGIN};
    use crate::storage::MemoryTokenStore;
    use recruit_core::Role;

    /// 네트워크 없이 원하는 세션 상태를 가진 가드 생성.
    async fn guard_with_session(token: Option<&str>, role: Option<Role>) -> NavigationGuard {
        // 주소로 요청이 나가면 실패하도록 닫힌 포트를 사용
        let api = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        let session = Arc::new(SessionStore::new(api, Arc::new(MemoryTokenStore::new())));

        if let Some(t) = token {
            session.set_session(Some(t)).await.unwrap();
        }
        if let Some(r) = role {
            // 사용자 정보를 직접 주입하는 대신 mockito 없이 세션을
            // 채우기 위해 fetch_me를 우회한다: 역할만 다른 고정
            // 사용자를 역직렬화해서 넣는다.
            let user: recruit_core::User = serde_json::from_str(&format!(
                r#"{{"id": 1, "email": "x@y.z", "role": "{}",
                     "created_at": "2024-05-01T09:00:00Z"}}"#,
                r
            ))
            .unwrap();
            session.inject_user_for_tests(user).await;
        }

        NavigationGuard::new(session)
    }

    fn meta(requires_auth: bool, role: Option<Role>, auth_page: bool) -> RouteMeta {
        RouteMeta {
            requires_auth,
            role,
            auth_page,
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_to_recruiter_page_redirects_to_recruiter_login() {
        let guard = guard_with_session(None, None).await;
        let decision = guard.check(&meta(true, Some(Role::Recruiter), false)).await;
        assert_eq!(decision, GuardDecision::Redirect(RECRUITER_LOGIN.to_string()));
    }

    #[tokio::test]
    async fn test_unauthenticated_to_candidate_page_redirects_to_candidate_login() {
        let guard = guard_with_session(None, None).await;
        let decision = guard.check(&meta(true, Some(Role::Candidate), false)).await;
        assert_eq!(decision, GuardDecision::Redirect(CANDIDATE_LOGIN.to_string()));
    }

    #[tokio::test]
    async fn test_recruiter_on_candidate_page_goes_to_recruiter_home() {
        let guard = guard_with_session(Some("tok"), Some(Role::Recruiter)).await;
        let decision = guard.check(&meta(true, Some(Role::Candidate), false)).await;
        // 외부 보호 페이지도, 로그인 루프도 아닌 자기 홈으로
        assert_eq!(decision, GuardDecision::Redirect(RECRUITER_HOME.to_string()));
    }

    #[tokio::test]
    async fn test_candidate_on_recruiter_page_goes_to_candidate_home() {
        let guard = guard_with_session(Some("tok"), Some(Role::Candidate)).await;
        let decision = guard.check(&meta(true, Some(Role::Recruiter), false)).await;
        assert_eq!(decision, GuardDecision::Redirect(CANDIDATE_HOME.to_string()));
    }

    #[tokio::test]
    async fn test_authenticated_candidate_on_login_page_goes_home() {
        let guard = guard_with_session(Some("tok"), Some(Role::Candidate)).await;
        let decision = guard.check(&RouteMeta::auth_page()).await;
        assert_eq!(decision, GuardDecision::Redirect(CANDIDATE_HOME.to_string()));
    }

    #[tokio::test]
    async fn test_authenticated_recruiter_on_login_page_goes_home() {
        let guard = guard_with_session(Some("tok"), Some(Role::Recruiter)).await;
        let decision = guard.resolve(CANDIDATE_LOGIN).await;
        assert_eq!(decision, GuardDecision::Redirect(RECRUITER_HOME.to_string()));
    }

    #[tokio::test]
    async fn test_plain_route_always_allowed() {
        let anonymous = guard_with_session(None, None).await;
        assert_eq!(anonymous.resolve("/").await, GuardDecision::Allow);
        assert_eq!(anonymous.resolve("/jobs/5").await, GuardDecision::Allow);

        let candidate = guard_with_session(Some("tok"), Some(Role::Candidate)).await;
        assert_eq!(candidate.resolve("/").await, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_unknown_path_allowed() {
        let guard = guard_with_session(None, None).await;
        assert_eq!(guard.resolve("/totally/unknown").await, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_matching_role_allowed() {
        let guard = guard_with_session(Some("tok"), Some(Role::Recruiter)).await;
        let decision = guard.resolve(RECRUITER_HOME).await;
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_admin_falls_back_to_candidate_home() {
        let guard = guard_with_session(Some("tok"), Some(Role::Admin)).await;
        let decision = guard.check(&meta(true, Some(Role::Recruiter), false)).await;
        assert_eq!(decision, GuardDecision::Redirect(CANDIDATE_HOME.to_string()));
    }
}
