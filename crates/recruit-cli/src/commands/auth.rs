//! 인증 관련 명령: login / logout / whoami / register.

use super::resolve_password;
use recruit_client::SessionStore;
use recruit_core::{RegisterRequest, Role};
use std::sync::Arc;
use tracing::info;

/// 로그인 후 세션 요약 출력.
pub async fn login(
    session: &Arc<SessionStore>,
    email: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = resolve_password(password)?;
    session.login(email, &password).await?;

    match session.current_user().await {
        Some(user) => {
            println!(
                "Logged in as {} ({})",
                user.full_name.as_deref().unwrap_or(&user.email),
                user.role
            );
        }
        None => {
            // 토큰은 발급됐지만 identity 조회가 거부된 경우
            println!("Login succeeded but the session could not be verified; try again");
        }
    }
    Ok(())
}

/// 세션 및 저장된 토큰 삭제.
pub async fn logout(session: &Arc<SessionStore>) -> anyhow::Result<()> {
    session.logout().await?;
    println!("Logged out");
    Ok(())
}

/// 현재 세션의 사용자 출력.
pub async fn whoami(session: &Arc<SessionStore>) -> anyhow::Result<()> {
    match session.current_user().await {
        Some(user) => {
            println!("{} <{}>", user.full_name.as_deref().unwrap_or("-"), user.email);
            println!("  role:     {}", user.role);
            if let Some(location) = &user.location {
                println!("  location: {}", location);
            }
            println!("  since:    {}", user.created_at.format("%Y-%m-%d"));
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

/// 지원자 회원가입.
pub async fn register_candidate(
    session: &Arc<SessionStore>,
    email: &str,
    password: Option<String>,
    full_name: Option<String>,
    phone: Option<String>,
    location: Option<String>,
) -> anyhow::Result<()> {
    let password = resolve_password(password)?;
    let mut payload = RegisterRequest::new(email, password, Role::Candidate);
    payload.full_name = full_name;
    payload.phone = phone;
    payload.location = location;

    session.register_candidate(payload).await?;
    info!("Candidate registration complete for {}", email);
    println!("Registered and logged in as {}", email);
    Ok(())
}

/// 채용 담당자 회원가입.
pub async fn register_recruiter(
    session: &Arc<SessionStore>,
    email: &str,
    password: Option<String>,
    full_name: Option<String>,
) -> anyhow::Result<()> {
    let password = resolve_password(password)?;
    let mut payload = RegisterRequest::new(email, password, Role::Recruiter);
    payload.full_name = full_name;

    session.register_recruiter(payload).await?;
    info!("Recruiter registration complete for {}", email);
    println!("Registered and logged in as {}", email);
    Ok(())
}
