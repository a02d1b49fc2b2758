//! Runtime platform identity

use crate::error::FsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform the adapter layer is running on.
///
/// Exactly one variant is selected at process start and never re-bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Parse a raw platform identity string.
    ///
    /// Anything outside {android, ios} is a fatal configuration error; there
    /// is no default or fallback platform.
    pub fn from_identity(identity: &str) -> Result<Self, FsError> {
        match identity {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(FsError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn identity(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    pub fn is_android(self) -> bool {
        self == Platform::Android
    }

    pub fn is_ios(self) -> bool {
        self == Platform::Ios
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}
