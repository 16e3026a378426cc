//! CLI 하위 명령 구현.

pub mod auth;
pub mod jobs;
pub mod open;
pub mod recruiter;

use anyhow::bail;

/// 비밀번호 확보: 인자 → `RECRUIT_PASSWORD` 환경변수 순서.
pub fn resolve_password(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = arg {
        return Ok(password);
    }
    match std::env::var("RECRUIT_PASSWORD") {
        Ok(password) if !password.is_empty() => Ok(password),
        _ => bail!("Password required: pass --password or set RECRUIT_PASSWORD"),
    }
}
