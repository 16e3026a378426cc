//! 내비게이션 가드 시뮬레이션.
//!
//! SPA에서 주소창에 경로를 입력했을 때 가드가 내리는 판정을
//! 현재 세션 기준으로 보여줍니다.

use recruit_client::{GuardDecision, NavigationGuard, SessionStore};
use std::sync::Arc;

/// 경로에 대한 가드 판정 출력.
pub async fn run(session: &Arc<SessionStore>, path: &str) -> anyhow::Result<()> {
    let guard = NavigationGuard::new(Arc::clone(session));

    let name = guard
        .table()
        .find(path)
        .map(|route| route.name)
        .unwrap_or("(unknown)");

    match guard.resolve(path).await {
        GuardDecision::Allow => {
            println!("{} -> allow [{}]", path, name);
        }
        GuardDecision::Redirect(target) => {
            let target_name = guard
                .table()
                .find(&target)
                .map(|route| route.name)
                .unwrap_or("(unknown)");
            println!("{} -> redirect to {} [{}]", path, target, target_name);
        }
    }
    Ok(())
}
