//! iOS filesystem adapter
//!
//! Binds the shared contract to the private data directory. `open` resolves
//! the file to a URL and awaits the native document preview; there is no
//! MIME-based short-circuit, the native layer decides viewability.

use crate::adapter::{self, FilesystemAdapter};
use crate::config::StorageConfig;
use crate::error::FsError;
use crate::native::{DocumentPreviewer, FileHandle, NativeFileApi, RemoveResult};
use crate::path::StoragePath;
use crate::platform::Platform;
use async_trait::async_trait;
use std::sync::Arc;

pub struct IosAdapter {
    base_dir: String,
    files: Arc<dyn NativeFileApi>,
    previewer: Arc<dyn DocumentPreviewer>,
}

impl IosAdapter {
    pub fn new(
        config: &StorageConfig,
        files: Arc<dyn NativeFileApi>,
        previewer: Arc<dyn DocumentPreviewer>,
    ) -> Self {
        Self {
            base_dir: config.ios_root.trim_end_matches('/').to_string(),
            files,
            previewer,
        }
    }
}

#[async_trait]
impl FilesystemAdapter for IosAdapter {
    fn platform(&self) -> Platform {
        Platform::Ios
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
        let dir_url = self
            .files
            .resolve_directory_url(&resolved.base_dir)
            .await?;
        let url = format!("{}/{}", dir_url.trim_end_matches('/'), resolved.name);
        tracing::debug!(%url, mime = ?mime_hint, "presenting document preview");

        self.previewer
            .preview_document(&url, mime_hint)
            .await
            .map_err(|failure| FsError::CantOpenFileType { code: failure.code })
    }
}
