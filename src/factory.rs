//! Adapter selection
//!
//! Pure selection over the platform identity, plus an opt-in process-wide
//! installation for callers that keep the original single-binding behavior.
//! Consumers are encouraged to take the returned `Arc` as an explicit
//! constructor dependency instead of reaching for the installed global.

use crate::adapter::FilesystemAdapter;
use crate::android::AndroidAdapter;
use crate::config::StorageConfig;
use crate::error::FsError;
use crate::ios::IosAdapter;
use crate::native::{DocumentPreviewer, NativeFileApi, NativeOpener};
use crate::platform::Platform;
use std::sync::{Arc, OnceLock};

static INSTALLED: OnceLock<Arc<dyn FilesystemAdapter>> = OnceLock::new();

/// Native capabilities the adapters delegate to
#[derive(Clone)]
pub struct NativeCapabilities {
    pub files: Arc<dyn NativeFileApi>,
    pub opener: Arc<dyn NativeOpener>,
    pub previewer: Arc<dyn DocumentPreviewer>,
}

/// Construct the adapter for an already-parsed platform.
pub fn adapter_for(
    platform: Platform,
    config: &StorageConfig,
    caps: &NativeCapabilities,
) -> Arc<dyn FilesystemAdapter> {
    match platform {
        Platform::Android => Arc::new(AndroidAdapter::new(
            config,
            caps.files.clone(),
            caps.opener.clone(),
        )),
        Platform::Ios => Arc::new(IosAdapter::new(
            config,
            caps.files.clone(),
            caps.previewer.clone(),
        )),
    }
}

/// Select an adapter from a raw platform identity.
///
/// Identities outside {android, ios} are a fatal configuration error; there
/// is no default adapter.
pub fn select(
    identity: &str,
    config: &StorageConfig,
    caps: &NativeCapabilities,
) -> Result<Arc<dyn FilesystemAdapter>, FsError> {
    let platform = Platform::from_identity(identity)?;
    config.validate()?;
    tracing::debug!(%platform, base_dir = config.base_dir_for(platform), "selected filesystem adapter");
    Ok(adapter_for(platform, config, caps))
}

/// Bind the process-wide adapter. The binding is immutable for the remainder
/// of the run; a second call fails.
pub fn install(adapter: Arc<dyn FilesystemAdapter>) -> Result<(), FsError> {
    INSTALLED
        .set(adapter)
        .map_err(|_| FsError::AdapterAlreadyInstalled)
}

/// The process-wide adapter, if one was installed.
pub fn installed() -> Option<Arc<dyn FilesystemAdapter>> {
    INSTALLED.get().cloned()
}
