//! Opaque native file and viewer capabilities
//!
//! Each trait is a thin asynchronous delegate to a platform-provided
//! operation with platform-native error codes. Adapters never interpret
//! native failures beyond the single Android status-code translation in the
//! Android adapter's `open`; everything else passes through unchanged.

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Native status code an opener reports when no app can display the type
pub const OPEN_NO_APP_FOR_TYPE: i32 = 9;

/// Handle to a file entry in the device filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub dir: String,
    pub name: String,
    pub native_url: String,
}

/// Outcome of a recursive removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveResult {
    pub success: bool,
    /// Absolute location that was removed
    pub removed: String,
}

/// Failure reported by a native opener or previewer, carrying the
/// platform-native status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFailure {
    pub code: i32,
    pub message: String,
}

impl OpenFailure {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for OpenFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native open failed with code {}: {}", self.code, self.message)
    }
}

impl std::error::Error for OpenFailure {}

/// Asynchronous delegate to the OS file APIs.
///
/// Directory arguments are absolute base directories (never ending in a
/// separator); names are single terminal segments.
#[async_trait]
pub trait NativeFileApi: Send + Sync {
    /// Check whether a file named `name` exists under `dir`
    async fn check_file(&self, dir: &str, name: &str) -> io::Result<bool>;

    /// Check whether a directory named `name` exists under `dir`
    async fn check_dir(&self, dir: &str, name: &str) -> io::Result<bool>;

    /// Look up a directory entry, optionally creating it
    async fn get_directory(&self, dir: &str, name: &str, create: bool) -> io::Result<FileHandle>;

    /// Look up a file entry, optionally creating an empty one
    async fn get_file(&self, dir: &str, name: &str, create: bool) -> io::Result<FileHandle>;

    /// Resolve a directory to a native URL
    async fn resolve_directory_url(&self, dir: &str) -> io::Result<String>;

    /// Write the full buffer to `dir`/`name`, replacing existing content
    async fn write_file(&self, dir: &str, name: &str, data: &[u8]) -> io::Result<FileHandle>;

    /// Recursively remove the file or directory at `dir`/`name`
    async fn remove_recursively(&self, dir: &str, name: &str) -> io::Result<RemoveResult>;
}

/// Native "open with default app" capability (Android).
#[async_trait]
pub trait NativeOpener: Send + Sync {
    /// Hand the file at `absolute_path` to the default app for its type.
    ///
    /// Fails with code [`OPEN_NO_APP_FOR_TYPE`] when no installed app can
    /// display the file.
    async fn open_with_default_app(
        &self,
        absolute_path: &str,
        mime_hint: Option<&str>,
    ) -> Result<(), OpenFailure>;
}

/// Native document-preview capability (iOS).
///
/// The platform's callback-style completion contract is surfaced as a single
/// awaited result: success resolves, failure carries the native error code.
#[async_trait]
pub trait DocumentPreviewer: Send + Sync {
    async fn preview_document(&self, url: &str, mime_hint: Option<&str>)
        -> Result<(), OpenFailure>;
}

/// Disk-backed implementation of the native file surface using tokio's
/// asynchronous filesystem. Used by integration tests and desktop builds.
#[derive(Debug, Clone, Default)]
pub struct LocalFileApi;

impl LocalFileApi {
    fn join(dir: &str, name: &str) -> PathBuf {
        Path::new(dir).join(name)
    }

    fn handle(dir: &str, name: &str) -> FileHandle {
        let full = Self::join(dir, name);
        FileHandle {
            dir: dir.to_string(),
            name: name.to_string(),
            native_url: format!("file://{}", full.display()),
        }
    }
}

#[async_trait]
impl NativeFileApi for LocalFileApi {
    async fn check_file(&self, dir: &str, name: &str) -> io::Result<bool> {
        match tokio::fs::metadata(Self::join(dir, name)).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn check_dir(&self, dir: &str, name: &str) -> io::Result<bool> {
        match tokio::fs::metadata(Self::join(dir, name)).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn get_directory(&self, dir: &str, name: &str, create: bool) -> io::Result<FileHandle> {
        let path = Self::join(dir, name);
        if create {
            tokio::fs::create_dir_all(&path).await?;
        } else {
            let meta = tokio::fs::metadata(&path).await?;
            if !meta.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a directory", path.display()),
                ));
            }
        }
        Ok(Self::handle(dir, name))
    }

    async fn get_file(&self, dir: &str, name: &str, create: bool) -> io::Result<FileHandle> {
        let path = Self::join(dir, name);
        if create {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)
                .await?;
        } else {
            let meta = tokio::fs::metadata(&path).await?;
            if !meta.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a file", path.display()),
                ));
            }
        }
        Ok(Self::handle(dir, name))
    }

    async fn resolve_directory_url(&self, dir: &str) -> io::Result<String> {
        let meta = tokio::fs::metadata(dir).await?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{dir} is not a directory"),
            ));
        }
        Ok(format!("file://{}", dir.trim_end_matches('/')))
    }

    async fn write_file(&self, dir: &str, name: &str, data: &[u8]) -> io::Result<FileHandle> {
        let path = Self::join(dir, name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Full replacement, no merge or append
        tokio::fs::write(&path, data).await?;
        Ok(Self::handle(dir, name))
    }

    async fn remove_recursively(&self, dir: &str, name: &str) -> io::Result<RemoveResult> {
        let path = Self::join(dir, name);
        let meta = tokio::fs::metadata(&path).await?;
        if meta.is_dir() {
            tokio::fs::remove_dir_all(&path).await?;
        } else {
            tokio::fs::remove_file(&path).await?;
        }
        Ok(RemoveResult {
            success: true,
            removed: path.display().to_string(),
        })
    }
}
