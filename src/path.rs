//! StoragePath resolution
//!
//! Logical slash-separated paths relative to a platform storage root, and the
//! pure resolution step shared by both adapters. Resolution performs no I/O:
//! its only input besides the path is the platform's base directory.

use crate::error::FsError;
use std::fmt;

/// Logical, platform-independent path identifying a resource relative to the
/// application storage root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StoragePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute base directory plus terminal file/directory name.
///
/// Invariants: `base_dir` never ends in a separator and `name` is non-empty.
/// A ResolvedPath is always consumed immediately by an adapter operation; it
/// carries no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub base_dir: String,
    pub name: String,
}

impl ResolvedPath {
    /// Full absolute location: `base_dir` joined with the terminal name.
    pub fn full(&self) -> String {
        format!("{}/{}", self.base_dir, self.name)
    }
}

/// Resolve a StoragePath against a platform base directory.
///
/// Splits the path into segments, prepends `base_dir`, takes the last segment
/// as the terminal name and joins the preceding segments into the absolute
/// base directory. Repeated separators collapse; `.` and `..` segments are
/// rejected because they could escape the storage root.
///
/// Fails with `InvalidPath` precisely when the terminal name is missing or
/// blank (empty path, trailing separator, or whitespace-only last segment).
pub fn resolve(base_dir: &str, path: &StoragePath) -> Result<ResolvedPath, FsError> {
    let raw = path.as_str();
    if raw.trim().is_empty() {
        return Err(FsError::InvalidPath("path is empty".to_string()));
    }
    if raw.ends_with('/') {
        return Err(FsError::InvalidPath(format!(
            "path {raw:?} has no terminal name"
        )));
    }

    let mut segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(FsError::InvalidPath(format!(
            "path {raw:?} contains dot segments"
        )));
    }

    let name = match segments.pop() {
        Some(last) if !last.trim().is_empty() => last.to_string(),
        _ => {
            return Err(FsError::InvalidPath(format!(
                "path {raw:?} has a blank terminal name"
            )))
        }
    };

    let root = base_dir.trim_end_matches('/');
    let base_dir = if segments.is_empty() {
        root.to_string()
    } else {
        format!("{}/{}", root, segments.join("/"))
    };

    Ok(ResolvedPath { base_dir, name })
}
