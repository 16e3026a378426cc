//! 세션 수명 주기 및 가드 통합 테스트.
//!
//! mockito로 백엔드를 대신하고, 시작 → 로그인 → 내비게이션 →
//! 로그아웃의 전체 흐름을 검증합니다.

use recruit_client::{
    ApiClient, GuardDecision, MemoryTokenStore, NavigationGuard, SessionStore, TokenStore,
    CANDIDATE_HOME, CANDIDATE_LOGIN, RECRUITER_HOME,
};
use recruit_core::Role;
use std::sync::Arc;

fn user_json(role: &str) -> String {
    format!(
        r#"{{"id": 1, "email": "kim@example.com", "full_name": "Kim",
             "role": "{}", "created_at": "2024-05-01T09:00:00Z"}}"#,
        role
    )
}

fn session_for(url: &str, store: Arc<MemoryTokenStore>) -> Arc<SessionStore> {
    let api = ApiClient::new(url, 5).unwrap();
    Arc::new(SessionStore::new(api, store))
}

#[tokio::test]
async fn startup_hydration_drives_guard_decisions() {
    let mut server = mockito::Server::new_async().await;
    let _me = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer persisted")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_json("recruiter"))
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("persisted"));
    let session = session_for(&server.url(), store);
    session.initialize().await.unwrap();

    let guard = NavigationGuard::new(Arc::clone(&session));

    // 자기 홈은 허용
    assert_eq!(guard.resolve(RECRUITER_HOME).await, GuardDecision::Allow);
    // 다른 역할의 보호 페이지는 자기 홈으로
    assert_eq!(
        guard.resolve(CANDIDATE_HOME).await,
        GuardDecision::Redirect(RECRUITER_HOME.to_string())
    );
    // 로그인 페이지도 자기 홈으로
    assert_eq!(
        guard.resolve("/recruiter/login").await,
        GuardDecision::Redirect(RECRUITER_HOME.to_string())
    );
    // 공개 페이지는 그대로
    assert_eq!(guard.resolve("/jobs/3").await, GuardDecision::Allow);
}

#[tokio::test]
async fn expired_persisted_token_demotes_and_guard_sends_to_login() {
    let mut server = mockito::Server::new_async().await;
    let me = server
        .mock("GET", "/auth/me")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Could not validate credentials"}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("expired"));
    let session = session_for(&server.url(), Arc::clone(&store));
    session.initialize().await.unwrap();

    // 무음 강등: 에러 없이 익명 상태가 되고 저장소도 비워진다
    assert!(!session.is_authenticated().await);
    assert!(session.token().await.is_none());
    assert!(store.load().await.unwrap().is_none());

    let guard = NavigationGuard::new(Arc::clone(&session));
    assert_eq!(
        guard.resolve(CANDIDATE_HOME).await,
        GuardDecision::Redirect(CANDIDATE_LOGIN.to_string())
    );
    me.assert_async().await;
}

#[tokio::test]
async fn login_navigate_logout_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "tok-42", "role": "candidate", "full_name": "Kim"}"#)
        .create_async()
        .await;
    let _me = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer tok-42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_json("candidate"))
        .create_async()
        .await;
    let jobs = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": 3, "title": "Backend Engineer", "company": "Recruit Flow",
                "location": "Seoul", "employment_type": "Full-time", "status": "open",
                "description": "d", "created_at": "2024-05-01T09:00:00Z",
                "stages": [], "applications_count": 0
            }]"#,
        )
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = session_for(&server.url(), Arc::clone(&store));
    let guard = NavigationGuard::new(Arc::clone(&session));

    // 로그인 전에는 보호 페이지 접근이 로그인으로 리다이렉트된다
    assert_eq!(
        guard.resolve(CANDIDATE_HOME).await,
        GuardDecision::Redirect(CANDIDATE_LOGIN.to_string())
    );

    session.login("kim@example.com", "pw").await.unwrap();
    assert!(session.is_authenticated().await);
    assert_eq!(session.role().await, Some(Role::Candidate));
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-42"));

    // 인증 후에는 홈 접근 허용, 로그인 페이지는 홈으로
    assert_eq!(guard.resolve(CANDIDATE_HOME).await, GuardDecision::Allow);
    assert_eq!(
        guard.resolve(CANDIDATE_LOGIN).await,
        GuardDecision::Redirect(CANDIDATE_HOME.to_string())
    );

    // 세션이 적용된 클라이언트로 공개 공고 조회
    let listing = session.api().list_jobs().await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].title, "Backend Engineer");
    jobs.assert_async().await;

    // 로그아웃은 네트워크 없이 전부 비운다
    session.logout().await.unwrap();
    assert!(!session.is_authenticated().await);
    assert!(store.load().await.unwrap().is_none());
    assert_eq!(
        guard.resolve(CANDIDATE_HOME).await,
        GuardDecision::Redirect(CANDIDATE_LOGIN.to_string())
    );
}

#[tokio::test]
async fn recruiter_endpoints_carry_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let jobs = server
        .mock("GET", "/recruiter/jobs")
        .match_header("authorization", "Bearer tok-r")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = session_for(&server.url(), store);
    session.set_session(Some("tok-r")).await.unwrap();

    let listing = session.api().recruiter_jobs().await.unwrap();
    assert!(listing.is_empty());
    jobs.assert_async().await;
}

#[tokio::test]
async fn candidate_apply_and_list_applications() {
    let mut server = mockito::Server::new_async().await;
    let apply = server
        .mock("POST", "/candidate/applications")
        .match_header("authorization", "Bearer tok-c")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{
                "id": 11, "status": "active", "cover_letter": "Hello",
                "created_at": "2024-06-01T00:00:00Z",
                "updated_at": "2024-06-01T00:00:00Z",
                "stage": {{"id": 1, "name": "Applied", "position": 1}},
                "job_id": 3, "job_title": "Backend Engineer",
                "candidate": {}
            }}"#,
            user_json("candidate")
        ))
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = session_for(&server.url(), store);
    session.set_session(Some("tok-c")).await.unwrap();

    let application = session
        .api()
        .apply(3, Some("Hello"), None)
        .await
        .unwrap();
    assert_eq!(application.job_id, 3);
    assert_eq!(application.stage.unwrap().name, "Applied");
    apply.assert_async().await;
}

#[tokio::test]
async fn resume_autofill_returns_parsed_fields() {
    let mut server = mockito::Server::new_async().await;
    let autofill = server
        .mock("POST", "/candidate/resume/autofill")
        .match_header("authorization", "Bearer tok-c")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"full_name": "Kim", "location": "Seoul", "skills": ["Rust", "SQL"]}"#)
        .create_async()
        .await;

    let resume_path =
        std::env::temp_dir().join(format!("rf-autofill-{}.pdf", std::process::id()));
    tokio::fs::write(&resume_path, b"resume bytes").await.unwrap();

    let store = Arc::new(MemoryTokenStore::new());
    let session = session_for(&server.url(), store);
    session.set_session(Some("tok-c")).await.unwrap();

    let parsed = session.api().autofill_resume(&resume_path).await.unwrap();
    assert_eq!(parsed["full_name"], "Kim");
    assert_eq!(parsed["skills"][0], "Rust");
    autofill.assert_async().await;

    tokio::fs::remove_file(&resume_path).await.ok();
}

#[tokio::test]
async fn duplicate_application_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let apply = server
        .mock("POST", "/candidate/applications")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Already applied"}"#)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let session = session_for(&server.url(), store);
    session.set_session(Some("tok-c")).await.unwrap();

    let err = session.api().apply(3, None, None).await.unwrap_err();
    match err {
        recruit_client::ClientError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Already applied");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    apply.assert_async().await;
}
