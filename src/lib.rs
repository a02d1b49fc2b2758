// Platform filesystem adapter layer - uniform save/open/exists/delete over a
// device storage root, with the terminal I/O step delegated to native capabilities

pub mod adapter;
pub mod android;
pub mod config;
pub mod error;
pub mod factory;
pub mod ios;
pub mod native;
pub mod path;
pub mod platform;

pub use adapter::FilesystemAdapter;
pub use error::FsError;
pub use path::{ResolvedPath, StoragePath};
pub use platform::Platform;
