//! 정적 경로 테이블.
//!
//! 원본 SPA 라우터의 경로 선언을 그대로 옮긴 것입니다. 경로별
//! 메타데이터는 시작 시 한 번 만들어지고 이후 변경되지 않습니다.

use recruit_core::Role;

/// 지원자 홈 경로.
pub const CANDIDATE_HOME: &str = "/candidate/dashboard";
/// 채용 담당자 홈 경로.
pub const RECRUITER_HOME: &str = "/recruiter/jobs";
/// 지원자 로그인 경로.
pub const CANDIDATE_LOGIN: &str = "/candidate/login";
/// 채용 담당자 로그인 경로.
pub const RECRUITER_LOGIN: &str = "/recruiter/login";

/// 역할의 홈 경로 반환.
///
/// recruiter만 전용 홈을 가지며, 그 외 역할은 지원자 홈으로
/// 보냅니다 (원본 동작과 동일).
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Recruiter => RECRUITER_HOME,
        _ => CANDIDATE_HOME,
    }
}

/// 요구 역할에 맞는 로그인 경로 반환.
pub fn login_for(required: Option<Role>) -> &'static str {
    match required {
        Some(Role::Recruiter) => RECRUITER_LOGIN,
        _ => CANDIDATE_LOGIN,
    }
}

/// 경로별 접근 요건.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// 인증 필요 여부
    pub requires_auth: bool,
    /// 요구 역할 (없으면 역할 무관)
    pub role: Option<Role>,
    /// 로그인/가입 등 비로그인 사용자 전용 페이지 여부
    pub auth_page: bool,
}

impl RouteMeta {
    /// 인증이 필요한 경로 메타데이터.
    pub fn requires(role: Role) -> Self {
        Self {
            requires_auth: true,
            role: Some(role),
            auth_page: false,
        }
    }

    /// 비로그인 사용자 전용 페이지 메타데이터.
    pub fn auth_page() -> Self {
        Self {
            requires_auth: false,
            role: None,
            auth_page: true,
        }
    }

    /// 특정 역할의 로그인 페이지 메타데이터.
    ///
    /// 원본 라우터는 로그인 페이지에도 `role`을 달아 두는데, 이는
    /// 접근 제한이 아니라 해당 페이지가 어느 역할용인지 표시일
    /// 뿐입니다 (`requires_auth`가 꺼져 있으므로 역할 검사는
    /// 인증된 사용자에게만 적용됩니다).
    pub fn auth_page_for(role: Role) -> Self {
        Self {
            requires_auth: false,
            role: Some(role),
            auth_page: true,
        }
    }
}

/// 단일 경로 선언.
#[derive(Debug, Clone)]
pub struct Route {
    /// 경로 패턴 (`:id` 세그먼트는 임의 값과 일치)
    pub path: &'static str,
    /// 경로 이름
    pub name: &'static str,
    /// 접근 요건
    pub meta: RouteMeta,
}

/// 정적 경로 테이블.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// 기본 경로 테이블 생성.
    pub fn new() -> Self {
        let routes = vec![
            Route {
                path: "/",
                name: "careers",
                meta: RouteMeta::default(),
            },
            Route {
                path: "/jobs/:id",
                name: "job-detail",
                meta: RouteMeta::default(),
            },
            Route {
                path: "/candidate/register",
                name: "candidate-register",
                meta: RouteMeta::auth_page(),
            },
            Route {
                path: CANDIDATE_LOGIN,
                name: "candidate-login",
                meta: RouteMeta::auth_page_for(Role::Candidate),
            },
            Route {
                path: CANDIDATE_HOME,
                name: "candidate-dashboard",
                meta: RouteMeta::requires(Role::Candidate),
            },
            Route {
                path: "/candidate/profile",
                name: "candidate-profile",
                meta: RouteMeta::requires(Role::Candidate),
            },
            Route {
                path: RECRUITER_LOGIN,
                name: "recruiter-login",
                meta: RouteMeta::auth_page_for(Role::Recruiter),
            },
            Route {
                path: "/recruiter/register",
                name: "recruiter-register",
                meta: RouteMeta::auth_page(),
            },
            Route {
                path: RECRUITER_HOME,
                name: "recruiter-jobs",
                meta: RouteMeta::requires(Role::Recruiter),
            },
            Route {
                path: "/recruiter/jobs/:id",
                name: "recruiter-job-detail",
                meta: RouteMeta::requires(Role::Recruiter),
            },
        ];
        Self { routes }
    }

    /// 전체 경로 목록 반환.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// 경로 문자열로 경로 선언 탐색.
    ///
    /// `:param` 세그먼트는 비어 있지 않은 임의 세그먼트와 일치합니다.
    pub fn find(&self, path: &str) -> Option<&Route> {
        let target = normalize(path);
        self.routes
            .iter()
            .find(|route| pattern_matches(route.path, &target))
    }
}

/// 뒤쪽 슬래시 제거 (루트 제외).
fn normalize(path: &str) -> String {
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

/// 패턴과 구체 경로의 세그먼트 단위 비교.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segs: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segs.len() != path_segs.len() {
        return false;
    }

    pattern_segs
        .iter()
        .zip(&path_segs)
        .all(|(pat, seg)| pat.starts_with(':') || pat == seg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let table = RouteTable::new();
        assert_eq!(table.find("/").unwrap().name, "careers");
        assert_eq!(table.find("/candidate/dashboard").unwrap().name, "candidate-dashboard");
        assert_eq!(table.find("/recruiter/jobs").unwrap().name, "recruiter-jobs");
    }

    #[test]
    fn test_param_lookup() {
        let table = RouteTable::new();
        assert_eq!(table.find("/jobs/42").unwrap().name, "job-detail");
        assert_eq!(table.find("/recruiter/jobs/42").unwrap().name, "recruiter-job-detail");
        assert!(table.find("/jobs/42/stages").is_none());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let table = RouteTable::new();
        assert_eq!(table.find("/candidate/profile/").unwrap().name, "candidate-profile");
    }

    #[test]
    fn test_unknown_path() {
        let table = RouteTable::new();
        assert!(table.find("/admin/settings").is_none());
    }

    #[test]
    fn test_role_paths() {
        assert_eq!(home_for(Role::Recruiter), RECRUITER_HOME);
        assert_eq!(home_for(Role::Candidate), CANDIDATE_HOME);
        assert_eq!(home_for(Role::Admin), CANDIDATE_HOME);
        assert_eq!(login_for(Some(Role::Recruiter)), RECRUITER_LOGIN);
        assert_eq!(login_for(Some(Role::Candidate)), CANDIDATE_LOGIN);
        assert_eq!(login_for(None), CANDIDATE_LOGIN);
    }
}
