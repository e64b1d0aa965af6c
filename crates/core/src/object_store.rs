//! Object storage seam for file payloads.
//!
//! File metadata lives in Postgres; the payload bytes live in object
//! storage under an opaque key. Upload transport is outside this engine —
//! the only operation the cascade coordinator needs is payload removal,
//! which must be idempotent so an interrupted cascade can be re-run.

use std::path::PathBuf;

use async_trait::async_trait;

/// Error type for object storage operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("Object storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage backend holding file payloads.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Remove the payload stored under `object_key`.
    ///
    /// Removing an absent object is a no-op success.
    async fn remove(&self, object_key: &str) -> Result<(), ObjectStoreError>;
}

/// Filesystem-backed object store rooted at a base directory.
pub struct LocalObjectStore {
    base_path: PathBuf,
}

impl LocalObjectStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn remove(&self, object_key: &str) -> Result<(), ObjectStoreError> {
        let path = self.base_path.join(object_key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ObjectStoreError::Io(e)),
        }
    }
}
