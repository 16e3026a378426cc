//! 공개 공고 탐색 및 지원자 명령.

use clap::Subcommand;
use recruit_client::SessionStore;
use recruit_core::Job;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// `recruit jobs` 하위 명령.
#[derive(Subcommand)]
pub enum JobsCommand {
    /// 모집 중인 공고 목록
    List,

    /// 공고 상세
    Show {
        /// 공고 ID
        id: i64,
    },
}

/// 공고 한 줄 요약 출력.
fn print_job_line(job: &Job) {
    println!(
        "#{:<4} {} @ {} ({}) - {} applicants",
        job.id, job.title, job.company, job.location, job.applications_count
    );
}

/// `jobs` 하위 명령 실행.
pub async fn run(session: &Arc<SessionStore>, cmd: JobsCommand) -> anyhow::Result<()> {
    match cmd {
        JobsCommand::List => {
            let listing = session.api().list_jobs().await?;
            if listing.is_empty() {
                println!("No open jobs");
                return Ok(());
            }
            for job in &listing {
                print_job_line(job);
            }
        }
        JobsCommand::Show { id } => {
            let job = session.api().job_detail(id).await?;
            print_job_line(&job);
            println!();
            println!("{}", job.description);
            if let Some(requirements) = &job.requirements {
                println!();
                println!("Requirements: {}", requirements);
            }
            if !job.stages.is_empty() {
                let names: Vec<&str> = job.stages.iter().map(|s| s.name.as_str()).collect();
                println!("Stages: {}", names.join(" -> "));
            }
        }
    }
    Ok(())
}

/// 공고에 지원.
pub async fn apply(
    session: &Arc<SessionStore>,
    job_id: i64,
    cover_letter: Option<String>,
    resume: Option<PathBuf>,
) -> anyhow::Result<()> {
    let application = session
        .api()
        .apply(job_id, cover_letter.as_deref(), resume.as_deref())
        .await?;
    let stage = application
        .stage
        .map(|s| s.name)
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Applied to \"{}\" (application #{}, stage: {})",
        application.job_title, application.id, stage
    );
    Ok(())
}

/// 이력서를 업로드해 추출된 프로필 필드를 출력.
pub async fn autofill(session: &Arc<SessionStore>, resume: &Path) -> anyhow::Result<()> {
    let parsed = session.api().autofill_resume(resume).await?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// 내 지원서 목록 출력.
pub async fn applications(session: &Arc<SessionStore>) -> anyhow::Result<()> {
    let listing = session.api().my_applications().await?;
    if listing.is_empty() {
        println!("No applications yet");
        return Ok(());
    }
    for app in &listing {
        let stage = app
            .stage
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("-");
        println!(
            "#{:<4} {} [{}] applied {}",
            app.id,
            app.job_title,
            stage,
            app.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}
