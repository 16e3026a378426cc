//! 도메인 타입 정의.
//!
//! 백엔드 API 스키마와 1:1로 대응하는 타입들입니다.

pub mod application;
pub mod job;
pub mod user;

pub use application::{Application, ApplicationMove, ApplicationNote, NoteCreate};
pub use job::{Job, JobCreate, JobStage, JobStatus, JobUpdate};
pub use user::{
    LoginRequest, ProfileUpdate, RegisterRequest, Role, TokenResponse, User,
};
