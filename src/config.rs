//! Storage root configuration
//!
//! Each platform owns a single absolute storage root that every StoragePath
//! resolves against: the external application storage root on Android, the
//! private data directory on iOS.

use crate::error::FsError;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Storage roots for the supported platforms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// External application storage root (Android)
    #[serde(default = "default_android_root")]
    pub android_root: String,

    /// Private data directory (iOS)
    #[serde(default = "default_ios_root")]
    pub ios_root: String,
}

fn default_android_root() -> String {
    "/storage/emulated/0/Android/data/org.learnfs.app/files".to_string()
}

fn default_ios_root() -> String {
    "/var/mobile/Containers/Data/Application/learnfs/Documents".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            android_root: default_android_root(),
            ios_root: default_ios_root(),
        }
    }
}

impl StorageConfig {
    /// The base directory the given platform's adapter resolves against
    pub fn base_dir_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.android_root,
            Platform::Ios => &self.ios_root,
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, FsError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| FsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), FsError> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the configured roots.
    ///
    /// A root must be an absolute directory and must not end in a separator,
    /// matching the ResolvedPath invariant.
    pub fn validate(&self) -> Result<(), FsError> {
        for (label, root) in [("android_root", &self.android_root), ("ios_root", &self.ios_root)] {
            if root.trim().is_empty() {
                return Err(FsError::InvalidPath(format!("{label} is empty")));
            }
            if !root.starts_with('/') {
                return Err(FsError::InvalidPath(format!(
                    "{label} {root:?} is not absolute"
                )));
            }
            if root.len() > 1 && root.ends_with('/') {
                return Err(FsError::InvalidPath(format!(
                    "{label} {root:?} must not end in a separator"
                )));
            }
        }
        Ok(())
    }
}
