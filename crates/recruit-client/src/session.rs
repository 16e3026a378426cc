//! 세션 저장소.
//!
//! "누가 로그인해 있는가"의 단일 진실 공급원입니다. Bearer 토큰과
//! 조회된 사용자 정보를 함께 들고, 토큰은 [`TokenStore`]를 통해
//! 프로세스 재시작 사이에 보존됩니다.
//!
//! # 에러 정책
//!
//! 두 가지 정책이 공존합니다:
//! - **무음 강등**: `fetch_me` 중 거부된/만료된 토큰은 에러 없이
//!   세션 전체를 초기화합니다. 호출자는 익명 상태가 됩니다.
//! - **표면화**: `login` / `register`의 실패는 호출자에게 그대로
//!   전파됩니다. 재시도는 하지 않습니다.
//!
//! # 불변 조건
//!
//! `user`는 `token`이 있을 때만 존재합니다. 반대로 토큰만 있고
//! 사용자가 아직 조회되지 않은 상태는 일시적으로 허용됩니다
//! (지연 하이드레이션).

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::storage::TokenStore;
use recruit_core::{RegisterRequest, Role, User};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// 세션의 내부 상태.
#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// 세션 저장소.
///
/// 전역 싱글턴이 아니라 명시적으로 생성해 `Arc`로 주입합니다.
/// 토큰과 파생 상태는 이 저장소의 연산만이 변경합니다.
pub struct SessionStore {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
    loading: AtomicBool,
    // 지연 하이드레이션 단일화: 동시에 들어온 내비게이션들이
    // 같은 fetch_me를 기다리게 한다.
    hydrate_lock: Mutex<()>,
}

impl SessionStore {
    /// 새 세션 저장소 생성.
    pub fn new(api: ApiClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: RwLock::new(SessionState::default()),
            loading: AtomicBool::new(false),
            hydrate_lock: Mutex::new(()),
        }
    }

    /// 내부 API 클라이언트 참조 반환.
    ///
    /// 세션과 동일한 Bearer 토큰이 적용된 클라이언트입니다.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // === 파생 상태 (항상 재계산, 별도 캐시 없음) ===

    /// 인증 여부. 토큰과 사용자 정보가 모두 있을 때만 true.
    pub async fn is_authenticated(&self) -> bool {
        let state = self.state.read().await;
        state.token.is_some() && state.user.is_some()
    }

    /// 현재 세션의 역할.
    pub async fn role(&self) -> Option<Role> {
        self.state.read().await.user.as_ref().map(|u| u.role)
    }

    /// 현재 사용자 정보.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// 현재 토큰.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// 로그인/가입 요청이 진행 중인지 여부.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    // === 연산 ===

    /// 세션 토큰 설정 또는 해제.
    ///
    /// 메모리 상태, API 클라이언트의 기본 Authorization 헤더,
    /// 영속 저장소를 함께 갱신합니다. 네트워크 호출은 없습니다.
    /// 토큰을 해제하면 사용자 정보도 함께 비웁니다.
    pub async fn set_session(&self, token: Option<&str>) -> ClientResult<()> {
        {
            let mut state = self.state.write().await;
            state.token = token.map(|t| t.to_string());
            if token.is_none() {
                state.user = None;
            }
        }
        self.api.set_bearer(token).await;

        match token {
            Some(t) => self.store.save(t).await,
            None => self.store.clear().await,
        }
    }

    /// 현재 토큰이 가리키는 사용자 조회.
    ///
    /// 토큰이 없으면 아무것도 하지 않고 `None`을 반환합니다.
    /// 조회에 실패하면 (주로 만료/무효 토큰) 에러를 내지 않고
    /// 세션 전체를 초기화합니다.
    pub async fn fetch_me(&self) -> Option<User> {
        if self.token().await.is_none() {
            return None;
        }

        match self.api.me().await {
            Ok(user) => {
                debug!("Session user loaded: {} ({})", user.email, user.role);
                let mut state = self.state.write().await;
                state.user = Some(user.clone());
                Some(user)
            }
            Err(e) => {
                warn!("Identity fetch failed, demoting to anonymous: {}", e);
                if let Err(e) = self.set_session(None).await {
                    // 강등은 반드시 완료되어야 하므로 저장소 실패는 삼킨다.
                    warn!("Failed to clear persisted token during demotion: {}", e);
                }
                None
            }
        }
    }

    /// 시작 시 세션 복원.
    ///
    /// 영속 저장소에 토큰이 있으면 API 클라이언트에 다시 적용하고,
    /// 사용자 정보가 없으면 조회합니다. 여러 번 호출해도 안전합니다.
    pub async fn initialize(&self) -> ClientResult<()> {
        if self.token().await.is_none() {
            if let Some(persisted) = self.store.load().await? {
                debug!("Restoring persisted session token");
                let mut state = self.state.write().await;
                state.token = Some(persisted);
            }
        }

        if let Some(token) = self.token().await {
            self.api.set_bearer(Some(&token)).await;
            if self.current_user().await.is_none() {
                self.fetch_me().await;
            }
        }
        Ok(())
    }

    /// 이메일/비밀번호로 로그인.
    ///
    /// 성공 시 발급된 토큰을 세션에 적용하고 사용자 정보를 조회합니다.
    /// 요청 실패(예: 잘못된 자격 증명)는 호출자에게 전파됩니다.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.login_inner(email, password).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn login_inner(&self, email: &str, password: &str) -> ClientResult<()> {
        let token = self.api.login(email, password).await?;
        self.set_session(Some(&token.access_token)).await?;
        info!("Logged in as {} ({})", email, token.role);
        self.fetch_me().await;
        Ok(())
    }

    /// 회원가입 후 같은 자격 증명으로 즉시 로그인.
    ///
    /// 가입 요청이 완료된 뒤에야 로그인이 시작됩니다. 실패는 전파됩니다.
    pub async fn register(&self, payload: &RegisterRequest) -> ClientResult<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.register_inner(payload).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn register_inner(&self, payload: &RegisterRequest) -> ClientResult<()> {
        self.api.register(payload).await?;
        info!("Registered {} as {}", payload.email, payload.role);
        self.login(&payload.email, &payload.password).await
    }

    /// 지원자 역할로 회원가입.
    pub async fn register_candidate(&self, mut payload: RegisterRequest) -> ClientResult<()> {
        payload.role = Role::Candidate;
        self.register(&payload).await
    }

    /// 채용 담당자 역할로 회원가입.
    pub async fn register_recruiter(&self, mut payload: RegisterRequest) -> ClientResult<()> {
        payload.role = Role::Recruiter;
        self.register(&payload).await
    }

    /// 로그아웃.
    ///
    /// 네트워크 호출 없이 세션과 영속 토큰을 무조건 비웁니다.
    pub async fn logout(&self) -> ClientResult<()> {
        info!("Logging out");
        self.set_session(None).await
    }

    /// 테스트에서 네트워크 없이 세션 상태를 구성하기 위한 주입.
    #[cfg(test)]
    pub(crate) async fn inject_user_for_tests(&self, user: User) {
        let mut state = self.state.write().await;
        state.user = Some(user);
    }

    /// 지연 하이드레이션: 토큰은 있는데 사용자 정보가 없으면 조회.
    ///
    /// 하이드레이션 뮤텍스로 단일화되어 있어, 동시에 여러 내비게이션이
    /// 들어와도 `fetch_me`는 한 번만 수행되고 나머지는 그 결과를
    /// 기다립니다.
    pub async fn ensure_user(&self) -> Option<User> {
        let _guard = self.hydrate_lock.lock().await;

        let needs_fetch = {
            let state = self.state.read().await;
            state.token.is_some() && state.user.is_none()
        };

        if needs_fetch {
            self.fetch_me().await
        } else {
            self.current_user().await
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}
