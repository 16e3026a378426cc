//! Bearer 토큰 영속화.
//!
//! 원본 SPA는 브라우저 `localStorage`의 단일 키(`rf_token`)에 토큰을
//! 저장했습니다. 여기서는 작은 key-value 인터페이스 뒤로 추상화하여
//! 세션 로직을 실제 저장소 없이 테스트할 수 있게 합니다.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// 토큰 저장소 인터페이스.
///
/// 프로세스 재시작 사이에 Bearer 토큰을 보존합니다.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 저장된 토큰 로드. 없으면 `None`.
    async fn load(&self) -> ClientResult<Option<String>>;

    /// 토큰 저장 (기존 값 덮어쓰기).
    async fn save(&self, token: &str) -> ClientResult<()>;

    /// 저장된 토큰 삭제. 이미 없어도 성공으로 처리합니다.
    async fn clear(&self) -> ClientResult<()>;
}

/// 파일 기반 토큰 저장소.
///
/// 단일 파일에 토큰 문자열 하나를 저장합니다.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// 주어진 경로를 사용하는 저장소 생성.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 저장 파일 경로 반환.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Storage(format!(
                "Failed to read token file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ClientError::Storage(format!(
                        "Failed to create token dir {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        tokio::fs::write(&self.path, token).await.map_err(|e| {
            ClientError::Storage(format!(
                "Failed to write token file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!("Token persisted to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Token file {} removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!(
                "Failed to remove token file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// 메모리 토큰 저장소.
///
/// 테스트 및 영속화가 필요 없는 일회성 세션용입니다.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// 비어 있는 저장소 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 토큰이 들어 있는 저장소 생성.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        let mut guard = self.token.write().await;
        *guard = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        let mut guard = self.token.write().await;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save("tok-1").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-1"));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // clear는 멱등
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("rf-store-{}", std::process::id()));
        let store = FileTokenStore::new(dir.join("rf_token"));

        assert!(store.load().await.unwrap().is_none());

        store.save("tok-file").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-file"));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        store.clear().await.unwrap();

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_file_store_blank_file_is_absent() {
        let dir = std::env::temp_dir().join(format!("rf-blank-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("rf_token");
        tokio::fs::write(&path, "  \n").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().await.unwrap().is_none());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
