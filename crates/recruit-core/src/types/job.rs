//! 채용 공고 및 전형 단계 타입.
//!
//! 백엔드의 `JobRead` / `JobCreate` / `JobUpdate` / `JobStageRead`
//! 스키마에 대응합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 공고 상태.
///
/// 공개 목록에는 `open` 상태의 공고만 노출됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// 모집 중
    Open,
    /// 마감
    Closed,
    /// 작성 중 (비공개)
    Draft,
}

impl JobStatus {
    /// 상태 문자열 반환 (API 와이어 포맷).
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Open
    }
}

/// 전형 단계.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStage {
    /// 단계 ID
    pub id: i64,
    /// 단계 이름 (예: "Applied", "Interview")
    pub name: String,
    /// 정렬 순서 (1부터 시작)
    pub position: i32,
}

/// 채용 공고.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// 공고 ID
    pub id: i64,
    /// 공고 제목
    pub title: String,
    /// 회사명
    pub company: String,
    /// 근무 지역
    pub location: String,
    /// 부서
    #[serde(default)]
    pub department: Option<String>,
    /// 고용 형태 (예: "Full-time")
    pub employment_type: String,
    /// 공고 상태
    pub status: JobStatus,
    /// 상세 설명
    pub description: String,
    /// 지원 요건
    #[serde(default)]
    pub requirements: Option<String>,
    /// 최소 연봉
    #[serde(default)]
    pub min_salary: Option<f64>,
    /// 최대 연봉
    #[serde(default)]
    pub max_salary: Option<f64>,
    /// 등록 시각
    pub created_at: DateTime<Utc>,
    /// 전형 단계 목록 (position 순)
    #[serde(default)]
    pub stages: Vec<JobStage>,
    /// 누적 지원자 수
    #[serde(default)]
    pub applications_count: u32,
}

impl Job {
    /// 이름으로 전형 단계 탐색.
    pub fn stage_by_name(&self, name: &str) -> Option<&JobStage> {
        self.stages.iter().find(|s| s.name == name)
    }
}

/// 공고 등록 요청 본문 (`POST /recruiter/jobs`).
#[derive(Debug, Clone, Serialize)]
pub struct JobCreate {
    /// 공고 제목
    pub title: String,
    /// 회사명
    pub company: String,
    /// 근무 지역
    pub location: String,
    /// 부서
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// 고용 형태
    pub employment_type: String,
    /// 공고 상태
    pub status: JobStatus,
    /// 상세 설명
    pub description: String,
    /// 지원 요건
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// 최소 연봉
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    /// 최대 연봉
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
    /// 전형 단계 이름 목록 (생략 시 백엔드 기본 단계 사용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_names: Option<Vec<String>>,
}

impl JobCreate {
    /// 필수 필드만으로 요청 생성.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            department: None,
            employment_type: "Full-time".to_string(),
            status: JobStatus::Open,
            description: description.into(),
            requirements: None,
            min_salary: None,
            max_salary: None,
            stage_names: None,
        }
    }
}

/// 공고 수정 요청 본문 (`PATCH /recruiter/jobs/{id}`).
///
/// 모든 필드가 선택이며, 포함된 필드만 변경됩니다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobUpdate {
    /// 공고 제목
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 회사명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// 근무 지역
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 부서
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// 고용 형태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    /// 공고 상태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// 상세 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 지원 요건
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// 최소 연봉
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    /// 최대 연봉
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
    /// 전형 단계 재정의 (기존 단계를 교체)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_names: Option<Vec<String>>,
}
