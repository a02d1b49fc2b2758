//! Shared filesystem adapter contract
//!
//! Both platform adapters implement this trait over the same path-resolution
//! algorithm and the same native delegation for the common operations; only
//! `open` differs per platform.

use crate::error::FsError;
use crate::native::{FileHandle, NativeFileApi, RemoveResult};
use crate::path::{self, ResolvedPath, StoragePath};
use crate::platform::Platform;
use async_trait::async_trait;

/// Uniform save/open/exists/delete contract over a device storage root.
///
/// Adapters are stateless: every call resolves the path anew and delegates
/// the terminal I/O step to a native capability. Concurrency guarantees are
/// deferred entirely to the underlying OS; two calls against the same path
/// have no ordering guarantee and `save` is last-writer-wins. No operation
/// supports cancellation or timeout.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// Platform this adapter is bound to
    fn platform(&self) -> Platform;

    /// Absolute storage root all paths resolve against
    fn base_dir(&self) -> &str;

    /// True if a file or a directory exists at the resolved location.
    ///
    /// Absence is `Ok(false)`, never an error; only a malformed path errs,
    /// before any native call.
    async fn exists(&self, path: &StoragePath) -> Result<bool, FsError>;

    /// Recursively remove the file or directory at the resolved location.
    ///
    /// Native failures propagate unchanged; there is no retry. Deleting a
    /// missing path is a native error, not a silent success.
    async fn delete(&self, path: &StoragePath) -> Result<RemoveResult, FsError>;

    /// Write the full buffer to the resolved location, replacing any
    /// existing content unconditionally.
    async fn save(&self, path: &StoragePath, data: &[u8]) -> Result<FileHandle, FsError>;

    /// Ask the OS to hand the resource at the resolved location to an
    /// appropriate viewer. Platform-specific.
    async fn open(&self, path: &StoragePath, mime_hint: Option<&str>) -> Result<(), FsError>;
}

pub(crate) fn resolve(base_dir: &str, storage_path: &StoragePath) -> Result<ResolvedPath, FsError> {
    path::resolve(base_dir, storage_path)
}

/// Shared `exists` delegation: a file or a directory counts; any probe
/// failure is reported as absence.
pub(crate) async fn exists_at(
    files: &dyn NativeFileApi,
    base_dir: &str,
    storage_path: &StoragePath,
) -> Result<bool, FsError> {
    let resolved = resolve(base_dir, storage_path)?;

    match files.check_file(&resolved.base_dir, &resolved.name).await {
        Ok(true) => return Ok(true),
        Ok(false) => {}
        Err(e) => {
            tracing::debug!(path = %resolved.full(), error = %e, "file probe failed, treating as absent");
        }
    }
    match files.check_dir(&resolved.base_dir, &resolved.name).await {
        Ok(found) => Ok(found),
        Err(e) => {
            tracing::debug!(path = %resolved.full(), error = %e, "directory probe failed, treating as absent");
            Ok(false)
        }
    }
}

/// Shared `delete` delegation: recursive removal, native failures unchanged.
pub(crate) async fn delete_at(
    files: &dyn NativeFileApi,
    base_dir: &str,
    storage_path: &StoragePath,
) -> Result<RemoveResult, FsError> {
    let resolved = resolve(base_dir, storage_path)?;
    tracing::debug!(path = %resolved.full(), "removing recursively");
    Ok(files
        .remove_recursively(&resolved.base_dir, &resolved.name)
        .await?)
}

/// Shared `save` delegation: full-buffer replacement.
pub(crate) async fn save_at(
    files: &dyn NativeFileApi,
    base_dir: &str,
    storage_path: &StoragePath,
    data: &[u8],
) -> Result<FileHandle, FsError> {
    let resolved = resolve(base_dir, storage_path)?;
    tracing::debug!(path = %resolved.full(), bytes = data.len(), "writing file");
    Ok(files
        .write_file(&resolved.base_dir, &resolved.name, data)
        .await?)
}
