//! # Recruit Core
//!
//! Recruit Flow 클라이언트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 클라이언트 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 및 역할 정의
//! - 채용 공고 및 전형 단계
//! - 지원서 및 지원 메모
//! - 요청/응답 페이로드
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
