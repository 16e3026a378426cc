//! 설정 관리.
//!
//! 이 모듈은 클라이언트 설정을 정의하고 관리합니다.
//! 파일(toml) → 환경 변수(`RECRUIT__` 접두사) 순서로 적용됩니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// API 설정
    #[serde(default)]
    pub api: ApiConfig,
    /// 토큰 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 백엔드 API 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API 기본 URL (버전 접두사 포함)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// 토큰 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bearer 토큰을 저장할 파일 경로
    pub token_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_path: "./.recruit/rf_token".to_string(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("api.base_url", ApiConfig::default().base_url)?
            .set_default("api.timeout_secs", 10)?
            .set_default("storage.token_path", StorageConfig::default().token_path)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // 파일에서 로드 (없으면 무시)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("RECRUIT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("recruit.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.token_path, "./.recruit/rf_token");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }
}
