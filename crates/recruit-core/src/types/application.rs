//! 지원서 및 지원 메모 타입.
//!
//! 백엔드의 `ApplicationRead` / `ApplicationMove` / `ApplicationNoteCreate`
//! 스키마에 대응합니다.

use super::job::JobStage;
use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 지원서에 달린 메모 (채용 담당자 전용).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationNote {
    /// 메모 ID
    pub id: i64,
    /// 본문
    pub body: String,
    /// 작성 시각
    pub created_at: DateTime<Utc>,
    /// 작성자 ID
    #[serde(default)]
    pub author_id: Option<i64>,
    /// 작성자 이름
    #[serde(default)]
    pub author_name: Option<String>,
}

/// 지원서.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// 지원서 ID
    pub id: i64,
    /// 지원 상태 (예: "active")
    pub status: String,
    /// 업로드된 이력서 경로
    #[serde(default)]
    pub resume_path: Option<String>,
    /// 자기소개서
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// 지원 시각
    pub created_at: DateTime<Utc>,
    /// 마지막 변경 시각
    pub updated_at: DateTime<Utc>,
    /// 현재 전형 단계
    #[serde(default)]
    pub stage: Option<JobStage>,
    /// 공고 ID
    pub job_id: i64,
    /// 공고 제목
    pub job_title: String,
    /// 지원자 정보
    pub candidate: User,
    /// 메모 목록 (지원자 조회 시에는 항상 비어 있음)
    #[serde(default)]
    pub notes: Vec<ApplicationNote>,
}

/// 지원서 단계 이동 요청 본문 (`POST /recruiter/applications/{id}/move`).
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationMove {
    /// 이동할 단계 ID (같은 공고의 단계여야 함)
    pub stage_id: i64,
}

/// 지원 메모 작성 요청 본문 (`POST /recruiter/applications/{id}/notes`).
#[derive(Debug, Clone, Serialize)]
pub struct NoteCreate {
    /// 메모 본문
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserialize_without_notes() {
        let json = r#"{
            "id": 11,
            "status": "active",
            "resume_path": null,
            "cover_letter": "Hello",
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-02T00:00:00Z",
            "stage": {"id": 1, "name": "Applied", "position": 1},
            "job_id": 3,
            "job_title": "Backend Engineer",
            "candidate": {
                "id": 7,
                "email": "kim@example.com",
                "role": "candidate",
                "created_at": "2024-05-01T09:00:00Z"
            }
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.job_id, 3);
        assert_eq!(app.stage.as_ref().unwrap().name, "Applied");
        assert!(app.notes.is_empty());
    }
}
