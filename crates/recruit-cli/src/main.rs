//! Recruit Flow CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 로그인 (비밀번호는 --password 또는 RECRUIT_PASSWORD 환경변수)
//! recruit login -e kim@example.com
//!
//! # 현재 세션 확인
//! recruit whoami
//!
//! # 공개 공고 탐색
//! recruit jobs list
//! recruit jobs show 3
//!
//! # 공고에 지원
//! recruit apply 3 --cover-letter "Hello" --resume ./resume.pdf
//!
//! # 채용 담당자 작업
//! recruit recruiter jobs
//! recruit recruiter post --title "Backend Engineer" --company "Acme" \
//!     --location Seoul --description "..."
//!
//! # 내비게이션 가드 시뮬레이션
//! recruit open /candidate/dashboard
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use recruit_client::{ApiClient, FileTokenStore, SessionStore};
use recruit_core::{init_logging, AppConfig, LogConfig};
use std::path::PathBuf;
use std::sync::Arc;

mod commands;

use commands::{auth, jobs, open, recruiter};

#[derive(Parser)]
#[command(name = "recruit")]
#[command(about = "Recruit Flow job board CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (toml)
    #[arg(short, long, default_value = "recruit.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 로그인 후 토큰을 저장
    Login {
        /// 이메일
        #[arg(short, long)]
        email: String,

        /// 비밀번호 (생략 시 RECRUIT_PASSWORD 환경변수 사용)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// 세션 및 저장된 토큰 삭제
    Logout,

    /// 현재 세션의 사용자 출력
    Whoami,

    /// 지원자로 회원가입 후 즉시 로그인
    RegisterCandidate {
        /// 이메일
        #[arg(short, long)]
        email: String,

        /// 비밀번호 (생략 시 RECRUIT_PASSWORD 환경변수 사용)
        #[arg(short, long)]
        password: Option<String>,

        /// 이름
        #[arg(long)]
        full_name: Option<String>,

        /// 전화번호
        #[arg(long)]
        phone: Option<String>,

        /// 거주 지역
        #[arg(long)]
        location: Option<String>,
    },

    /// 채용 담당자로 회원가입 후 즉시 로그인
    RegisterRecruiter {
        /// 이메일
        #[arg(short, long)]
        email: String,

        /// 비밀번호 (생략 시 RECRUIT_PASSWORD 환경변수 사용)
        #[arg(short, long)]
        password: Option<String>,

        /// 이름
        #[arg(long)]
        full_name: Option<String>,
    },

    /// 공개 공고 탐색
    #[command(subcommand)]
    Jobs(jobs::JobsCommand),

    /// 공고에 지원 (candidate 역할 필요)
    Apply {
        /// 공고 ID
        job_id: i64,

        /// 자기소개서
        #[arg(long)]
        cover_letter: Option<String>,

        /// 이력서 파일 경로
        #[arg(long)]
        resume: Option<PathBuf>,
    },

    /// 내 지원서 목록 (candidate 역할 필요)
    Applications,

    /// 이력서 파일을 업로드해 프로필 필드 자동 추출 (candidate 역할 필요)
    Autofill {
        /// 이력서 파일 경로
        resume: PathBuf,
    },

    /// 채용 담당자 작업 (recruiter 역할 필요)
    #[command(subcommand)]
    Recruiter(recruiter::RecruiterCommand),

    /// 경로에 대한 내비게이션 가드 판정 출력
    Open {
        /// SPA 경로 (예: /candidate/dashboard)
        path: String,
    },

    /// 백엔드 헬스체크
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config))?;

    init_logging(
        LogConfig::new(config.logging.level.clone())
            .with_format(config.logging.format.parse().unwrap_or_default()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let api = ApiClient::from_config(&config.api)?;
    let store = Arc::new(FileTokenStore::new(&config.storage.token_path));
    let session = Arc::new(SessionStore::new(api, store));

    // 저장된 토큰이 있으면 세션 복원
    session.initialize().await?;

    match cli.command {
        Commands::Login { email, password } => auth::login(&session, &email, password).await,
        Commands::Logout => auth::logout(&session).await,
        Commands::Whoami => auth::whoami(&session).await,
        Commands::RegisterCandidate {
            email,
            password,
            full_name,
            phone,
            location,
        } => auth::register_candidate(&session, &email, password, full_name, phone, location).await,
        Commands::RegisterRecruiter {
            email,
            password,
            full_name,
        } => auth::register_recruiter(&session, &email, password, full_name).await,
        Commands::Jobs(cmd) => jobs::run(&session, cmd).await,
        Commands::Apply {
            job_id,
            cover_letter,
            resume,
        } => jobs::apply(&session, job_id, cover_letter, resume).await,
        Commands::Applications => jobs::applications(&session).await,
        Commands::Autofill { resume } => jobs::autofill(&session, &resume).await,
        Commands::Recruiter(cmd) => recruiter::run(&session, cmd).await,
        Commands::Open { path } => open::run(&session, &path).await,
        Commands::Health => {
            let status = session.api().health().await?;
            println!("Backend status: {}", status.status);
            Ok(())
        }
    }
}
