//! 지원자 엔드포인트 (candidate 역할 필요).
//!
//! - `GET /candidate/profile`
//! - `PATCH /candidate/profile`
//! - `GET /candidate/applications`
//! - `POST /candidate/applications` (multipart)
//! - `POST /candidate/resume/autofill` (multipart)

use super::ApiClient;
use crate::error::{ClientError, ClientResult};
use recruit_core::{Application, ProfileUpdate, User};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::path::Path;
use tracing::debug;

impl ApiClient {
    /// 내 프로필 조회.
    pub async fn candidate_profile(&self) -> ClientResult<User> {
        self.get_json("/candidate/profile").await
    }

    /// 내 프로필 수정.
    ///
    /// 포함된 필드만 변경됩니다.
    pub async fn update_candidate_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        self.send_json(Method::PATCH, "/candidate/profile", update).await
    }

    /// 내 지원서 목록 조회 (최신순).
    pub async fn my_applications(&self) -> ClientResult<Vec<Application>> {
        self.get_json("/candidate/applications").await
    }

    /// 공고에 지원.
    ///
    /// 백엔드는 multipart 폼을 받습니다. 같은 공고에 중복 지원하면
    /// 400으로 응답합니다.
    ///
    /// # 인자
    /// * `job_id` - 지원할 공고 ID
    /// * `cover_letter` - 자기소개서 (선택)
    /// * `resume_path` - 첨부할 이력서 파일 경로 (선택)
    pub async fn apply(
        &self,
        job_id: i64,
        cover_letter: Option<&str>,
        resume_path: Option<&Path>,
    ) -> ClientResult<Application> {
        let mut form = Form::new().text("job_id", job_id.to_string());

        if let Some(letter) = cover_letter {
            form = form.text("cover_letter", letter.to_string());
        }

        if let Some(path) = resume_path {
            form = form.part("resume", resume_part(path).await?);
            debug!("Attaching resume from {}", path.display());
        }

        self.post_multipart("/candidate/applications", form).await
    }

    /// 이력서 자동 파싱.
    ///
    /// 이력서 파일을 업로드하면 백엔드의 파싱 서비스가 추출한 필드를
    /// JSON으로 돌려줍니다. 스키마는 파싱 서비스에 따라 달라지므로
    /// 해석하지 않고 그대로 전달합니다. 서비스가 구성되지 않은 경우
    /// 백엔드는 503으로 응답합니다.
    pub async fn autofill_resume(&self, resume_path: &Path) -> ClientResult<serde_json::Value> {
        let form = Form::new().part("resume", resume_part(resume_path).await?);
        debug!("Uploading resume {} for autofill", resume_path.display());
        self.post_multipart("/candidate/resume/autofill", form).await
    }
}

/// 이력서 파일을 multipart 파트로 읽어들입니다.
async fn resume_part(path: &Path) -> ClientResult<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ClientError::InvalidInput(format!(
            "Failed to read resume {}: {}",
            path.display(),
            e
        ))
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}
