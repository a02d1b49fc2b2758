// Integration tests - full adapter stack over a real (tokio) filesystem

mod common;

use async_trait::async_trait;
use learnfs::config::StorageConfig;
use learnfs::factory::{self, NativeCapabilities};
use learnfs::native::{DocumentPreviewer, LocalFileApi, NativeOpener, OpenFailure};
use learnfs::{FilesystemAdapter, FsError, Platform, StoragePath};
use std::sync::Arc;
use tempfile::TempDir;

struct NoopOpener;

#[async_trait]
impl NativeOpener for NoopOpener {
    async fn open_with_default_app(
        &self,
        _absolute_path: &str,
        _mime_hint: Option<&str>,
    ) -> Result<(), OpenFailure> {
        Ok(())
    }
}

struct NoopPreviewer;

#[async_trait]
impl DocumentPreviewer for NoopPreviewer {
    async fn preview_document(&self, _url: &str, _mime_hint: Option<&str>) -> Result<(), OpenFailure> {
        Ok(())
    }
}

/// Build an adapter for `identity` whose storage root is a fresh tempdir.
fn adapter_in_tempdir(identity: &str) -> (Arc<dyn FilesystemAdapter>, TempDir) {
    common::tracing::init_tracing_from_env();

    let temp = TempDir::new().unwrap();
    let root = temp.path().display().to_string();
    let config = StorageConfig {
        android_root: root.clone(),
        ios_root: root,
    };
    let caps = NativeCapabilities {
        files: Arc::new(LocalFileApi),
        opener: Arc::new(NoopOpener),
        previewer: Arc::new(NoopPreviewer),
    };
    let adapter = factory::select(identity, &config, &caps).unwrap();
    (adapter, temp)
}

#[tokio::test]
async fn save_then_exists_on_both_platforms() {
    for identity in ["android", "ios"] {
        let (adapter, _temp) = adapter_in_tempdir(identity);
        let path = StoragePath::from("lectures/week-03/slides.pdf");

        assert!(!adapter.exists(&path).await.unwrap());
        let handle = adapter.save(&path, b"slide deck").await.unwrap();
        assert_eq!(handle.name, "slides.pdf");
        assert!(adapter.exists(&path).await.unwrap(), "platform {identity}");
    }
}

#[tokio::test]
async fn save_replaces_content_last_writer_wins() {
    let (adapter, temp) = adapter_in_tempdir("android");
    let path = StoragePath::from("notes.txt");

    adapter.save(&path, b"first, much longer content").await.unwrap();
    adapter.save(&path, b"second").await.unwrap();

    let on_disk = std::fs::read(temp.path().join("notes.txt")).unwrap();
    assert_eq!(on_disk, b"second");
}

#[tokio::test]
async fn exists_is_false_not_error_for_absent_paths() {
    let (adapter, _temp) = adapter_in_tempdir("ios");
    assert!(!adapter
        .exists(&StoragePath::from("never/saved/file.bin"))
        .await
        .unwrap());
}

#[tokio::test]
async fn delete_missing_path_propagates_native_failure() {
    let (adapter, _temp) = adapter_in_tempdir("android");

    let err = adapter
        .delete(&StoragePath::from("no-such-entry"))
        .await
        .unwrap_err();
    match err {
        FsError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected native passthrough, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_removes_nested_directories() {
    let (adapter, _temp) = adapter_in_tempdir("android");

    adapter
        .save(&StoragePath::from("course/a/one.txt"), b"1")
        .await
        .unwrap();
    adapter
        .save(&StoragePath::from("course/b/two.txt"), b"2")
        .await
        .unwrap();

    let result = adapter.delete(&StoragePath::from("course")).await.unwrap();
    assert!(result.success);
    assert!(!adapter.exists(&StoragePath::from("course")).await.unwrap());
    assert!(!adapter
        .exists(&StoragePath::from("course/a/one.txt"))
        .await
        .unwrap());
}

#[tokio::test]
async fn malformed_paths_fail_before_touching_the_filesystem() {
    let (adapter, temp) = adapter_in_tempdir("ios");

    for raw in ["", "trailing/", "  ", "../outside"] {
        let err = adapter.save(&StoragePath::from(raw), b"x").await.unwrap_err();
        assert!(matches!(err, FsError::InvalidPath(_)), "path {raw:?}");
    }
    // Nothing was created under the root
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn factory_rejects_identities_outside_the_supported_set() {
    let config = StorageConfig::default();
    let caps = NativeCapabilities {
        files: Arc::new(LocalFileApi),
        opener: Arc::new(NoopOpener),
        previewer: Arc::new(NoopPreviewer),
    };

    for identity in ["windows", "web", "linux", ""] {
        assert!(matches!(
            factory::select(identity, &config, &caps),
            Err(FsError::UnsupportedPlatform(_))
        ));
    }
}

#[test]
fn factory_selection_matches_platform_roots() {
    let config = StorageConfig {
        android_root: "/sdcard/learnfs".to_string(),
        ios_root: "/private/learnfs".to_string(),
    };
    let caps = NativeCapabilities {
        files: Arc::new(LocalFileApi),
        opener: Arc::new(NoopOpener),
        previewer: Arc::new(NoopPreviewer),
    };

    let android = factory::select("android", &config, &caps).unwrap();
    assert_eq!(android.platform(), Platform::Android);
    assert_eq!(android.base_dir(), "/sdcard/learnfs");

    let ios = factory::select("ios", &config, &caps).unwrap();
    assert_eq!(ios.platform(), Platform::Ios);
    assert_eq!(ios.base_dir(), "/private/learnfs");
}
