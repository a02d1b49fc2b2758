//! Android filesystem adapter
//!
//! Binds the shared contract to the external application storage root. `open`
//! delegates to the native "open with default app" capability, translating
//! the one status code that means "no app can display this type" and passing
//! every other native failure through unchanged.

use crate::adapter::{self, FilesystemAdapter};
use crate::config::StorageConfig;
use crate::error::FsError;
use crate::native::{
    FileHandle, NativeFileApi, NativeOpener, RemoveResult, OPEN_NO_APP_FOR_TYPE,
};
use crate::path::StoragePath;
use crate::platform::Platform;
use async_trait::async_trait;
use std::io;
use std::sync::Arc;

pub struct AndroidAdapter {
    base_dir: String,
    files: Arc<dyn NativeFileApi>,
    opener: Arc<dyn NativeOpener>,
}

impl AndroidAdapter {
    pub fn new(
        config: &StorageConfig,
        files: Arc<dyn NativeFileApi>,
        opener: Arc<dyn NativeOpener>,
    ) -> Self {
        Self {
            base_dir: config.android_root.trim_end_matches('/').to_string(),
            files,
            opener,
        }
    }
}

#[async_trait]
impl FilesystemAdapter for AndroidAdapter {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    async fn exists(&self, path: &StoragePath) -> Result<bool, FsError> {
        adapter::exists_at(self.files.as_ref(), &self.base_dir, path).await
    }

    async fn delete(&self, path: &StoragePath) -> Result<RemoveResult, FsError> {
        adapter::delete_at(self.files.as_ref(), &self.base_dir, path).await
    }

    async fn save(&self, path: &StoragePath, data: &[u8]) -> Result<FileHandle, FsError> {
        adapter::save_at(self.files.as_ref(), &self.base_dir, path, data).await
    }

    async fn open(&self, path: &StoragePath, mime_hint: Option<&str>) -> Result<(), FsError> {
        let resolved = adapter::resolve(&self.base_dir, path)?;
        let full = resolved.full();
        tracing::debug!(path = %full, mime = ?mime_hint, "opening with default app");

        match self.opener.open_with_default_app(&full, mime_hint).await {
            Ok(()) => Ok(()),
            Err(failure) if failure.code == OPEN_NO_APP_FOR_TYPE => {
                Err(FsError::CantOpenFileType { code: failure.code })
            }
            Err(failure) => Err(FsError::Io(io::Error::other(failure))),
        }
    }
}
