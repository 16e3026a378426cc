//! 채용 담당자 명령.

use clap::Subcommand;
use recruit_client::SessionStore;
use recruit_core::{JobCreate, JobStatus, JobUpdate};
use std::sync::Arc;

/// `recruit recruiter` 하위 명령.
#[derive(Subcommand)]
pub enum RecruiterCommand {
    /// 내가 등록한 공고 목록
    Jobs,

    /// 공고 상세 및 지원서 목록
    Show {
        /// 공고 ID
        id: i64,
    },

    /// 공고 등록
    Post {
        /// 공고 제목
        #[arg(long)]
        title: String,

        /// 회사명
        #[arg(long)]
        company: String,

        /// 근무 지역
        #[arg(long)]
        location: String,

        /// 상세 설명
        #[arg(long)]
        description: String,

        /// 부서
        #[arg(long)]
        department: Option<String>,

        /// 고용 형태
        #[arg(long, default_value = "Full-time")]
        employment_type: String,

        /// 지원 요건
        #[arg(long)]
        requirements: Option<String>,

        /// 전형 단계 이름 (여러 번 지정 가능, 생략 시 기본 단계)
        #[arg(long = "stage")]
        stages: Vec<String>,
    },

    /// 공고 마감
    Close {
        /// 공고 ID
        id: i64,
    },

    /// 지원서를 다른 전형 단계로 이동
    Move {
        /// 지원서 ID
        application: i64,

        /// 이동할 단계 ID
        stage: i64,
    },

    /// 지원서에 메모 작성
    Note {
        /// 지원서 ID
        application: i64,

        /// 메모 본문
        body: String,
    },
}

/// `recruiter` 하위 명령 실행.
pub async fn run(session: &Arc<SessionStore>, cmd: RecruiterCommand) -> anyhow::Result<()> {
    match cmd {
        RecruiterCommand::Jobs => {
            let listing = session.api().recruiter_jobs().await?;
            if listing.is_empty() {
                println!("No jobs posted yet");
                return Ok(());
            }
            for job in &listing {
                println!(
                    "#{:<4} {} [{}] - {} applicants",
                    job.id, job.title, job.status, job.applications_count
                );
            }
        }
        RecruiterCommand::Show { id } => {
            let detail = session.api().recruiter_job_detail(id).await?;
            println!("#{} {} [{}]", detail.job.id, detail.job.title, detail.job.status);
            if detail.applications.is_empty() {
                println!("No applications");
                return Ok(());
            }
            for app in &detail.applications {
                let stage = app
                    .stage
                    .as_ref()
                    .map(|s| s.name.as_str())
                    .unwrap_or("-");
                println!(
                    "  #{:<4} {} <{}> [{}] {} notes",
                    app.id,
                    app.candidate.full_name.as_deref().unwrap_or("-"),
                    app.candidate.email,
                    stage,
                    app.notes.len()
                );
            }
        }
        RecruiterCommand::Post {
            title,
            company,
            location,
            description,
            department,
            employment_type,
            requirements,
            stages,
        } => {
            let mut payload = JobCreate::new(title, company, location, description);
            payload.department = department;
            payload.employment_type = employment_type;
            payload.requirements = requirements;
            if !stages.is_empty() {
                payload.stage_names = Some(stages);
            }

            let job = session.api().create_job(&payload).await?;
            println!("Posted job #{}: {}", job.id, job.title);
        }
        RecruiterCommand::Close { id } => {
            let update = JobUpdate {
                status: Some(JobStatus::Closed),
                ..Default::default()
            };
            let job = session.api().update_job(id, &update).await?;
            println!("Job #{} is now {}", job.id, job.status);
        }
        RecruiterCommand::Move { application, stage } => {
            let moved = session.api().move_application(application, stage).await?;
            let stage_name = moved
                .stage
                .map(|s| s.name)
                .unwrap_or_else(|| "-".to_string());
            println!("Application #{} moved to {}", moved.id, stage_name);
        }
        RecruiterCommand::Note { application, body } => {
            let updated = session.api().add_application_note(application, &body).await?;
            println!(
                "Note added to application #{} ({} notes total)",
                updated.id,
                updated.notes.len()
            );
        }
    }
    Ok(())
}
