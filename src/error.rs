//! Error taxonomy for the filesystem adapter layer
//!
//! Native I/O failures are never swallowed or retried; they pass through
//! unchanged except for the single Android status-code translation performed
//! by the Android adapter's `open`.

use std::fmt;
use std::io;

/// Errors surfaced by the filesystem adapter layer
#[derive(Debug)]
pub enum FsError {
    /// Malformed StoragePath: empty, trailing separator, dot segments, or a
    /// blank terminal name. Raised synchronously before any native call.
    InvalidPath(String),
    /// Opaque passthrough of a native filesystem failure
    Io(io::Error),
    /// The native viewer explicitly rejected the file's type
    CantOpenFileType { code: i32 },
    /// Platform identity outside the supported set
    UnsupportedPlatform(String),
    /// A process-wide adapter was already installed
    AdapterAlreadyInstalled,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::InvalidPath(msg) => write!(f, "invalid storage path: {msg}"),
            FsError::Io(err) => write!(f, "native filesystem error: {err}"),
            FsError::CantOpenFileType { code } => {
                write!(f, "no viewer can open this file type (native code {code})")
            }
            FsError::UnsupportedPlatform(identity) => {
                write!(f, "unsupported platform identity: {identity:?}")
            }
            FsError::AdapterAlreadyInstalled => {
                write!(f, "a filesystem adapter is already installed for this process")
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        FsError::Io(err)
    }
}
