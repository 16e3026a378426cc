//! 채용 담당자 엔드포인트 (recruiter/admin 역할 필요).
//!
//! - `GET /recruiter/jobs`
//! - `POST /recruiter/jobs`
//! - `GET /recruiter/jobs/{id}`
//! - `PATCH /recruiter/jobs/{id}`
//! - `POST /recruiter/applications/{id}/move`
//! - `POST /recruiter/applications/{id}/notes`

use super::ApiClient;
use crate::error::ClientResult;
use recruit_core::{Application, ApplicationMove, Job, JobCreate, JobUpdate, NoteCreate};
use reqwest::Method;
use serde::Deserialize;

/// 공고 상세 + 지원서 목록 응답 (`GET /recruiter/jobs/{id}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecruiterJobDetail {
    /// 공고
    pub job: Job,
    /// 해당 공고의 지원서 목록 (최신순)
    pub applications: Vec<Application>,
}

impl ApiClient {
    /// 내가 등록한 공고 목록 조회.
    pub async fn recruiter_jobs(&self) -> ClientResult<Vec<Job>> {
        self.get_json("/recruiter/jobs").await
    }

    /// 공고 등록.
    ///
    /// `stage_names`를 생략하면 백엔드가 기본 전형 단계를 생성합니다.
    pub async fn create_job(&self, payload: &JobCreate) -> ClientResult<Job> {
        self.send_json(Method::POST, "/recruiter/jobs", payload).await
    }

    /// 공고 상세 및 지원서 목록 조회.
    ///
    /// 다른 담당자의 공고는 404로 응답합니다.
    pub async fn recruiter_job_detail(&self, job_id: i64) -> ClientResult<RecruiterJobDetail> {
        self.get_json(&format!("/recruiter/jobs/{}", job_id)).await
    }

    /// 공고 수정.
    pub async fn update_job(&self, job_id: i64, payload: &JobUpdate) -> ClientResult<Job> {
        self.send_json(Method::PATCH, &format!("/recruiter/jobs/{}", job_id), payload)
            .await
    }

    /// 지원서를 다른 전형 단계로 이동.
    pub async fn move_application(
        &self,
        application_id: i64,
        stage_id: i64,
    ) -> ClientResult<Application> {
        let body = ApplicationMove { stage_id };
        self.send_json(
            Method::POST,
            &format!("/recruiter/applications/{}/move", application_id),
            &body,
        )
        .await
    }

    /// 지원서에 메모 작성.
    pub async fn add_application_note(
        &self,
        application_id: i64,
        body: &str,
    ) -> ClientResult<Application> {
        let payload = NoteCreate {
            body: body.to_string(),
        };
        self.send_json(
            Method::POST,
            &format!("/recruiter/applications/{}/notes", application_id),
            &payload,
        )
        .await
    }
}
