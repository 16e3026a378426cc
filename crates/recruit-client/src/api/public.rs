//! 공개 엔드포인트 (인증 불필요).
//!
//! - `GET /jobs`
//! - `GET /jobs/{id}`
//! - `GET /health`

use super::ApiClient;
use crate::error::ClientResult;
use recruit_core::Job;
use serde::Deserialize;

/// 헬스체크 응답.
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    /// 상태 문자열 (정상이면 "ok")
    pub status: String,
}

impl ApiClient {
    /// 모집 중인 공고 목록 조회 (최신순).
    pub async fn list_jobs(&self) -> ClientResult<Vec<Job>> {
        self.get_json("/jobs").await
    }

    /// 공고 상세 조회.
    ///
    /// 모집 중(`open`)이 아닌 공고는 백엔드가 404로 응답합니다.
    pub async fn job_detail(&self, job_id: i64) -> ClientResult<Job> {
        self.get_json(&format!("/jobs/{}", job_id)).await
    }

    /// 백엔드 헬스체크.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.get_json("/health").await
    }
}
