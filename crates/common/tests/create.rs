//! Integration tests for file creation

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ::common::grant::{GrantStore, Rights, RootId};
use ::common::provider::{LocalPicker, LocalProvider, NodeStat, ProviderError, TreeProvider};
use ::common::vfs::{NodeId, TreeFs, TreeFsError};
use mime::Mime;

#[tokio::test]
async fn test_create_returns_parent_metadata() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    let parent = fs
        .create_file(&root, "", "notes.txt", "hello")
        .await
        .unwrap();

    assert!(parent.is_dir());
    assert_eq!(parent.name, "data");
    assert_eq!(parent.path, "");
}

#[tokio::test]
async fn test_create_in_subdirectory() {
    let (fs, root, dir, _temp) = common::setup_test_env().await;

    std::fs::create_dir(dir.join("inbox")).unwrap();

    let parent = fs
        .create_file(&root, "inbox", "capture.org", "* TODO")
        .await
        .unwrap();
    assert_eq!(parent.name, "inbox");

    let contents = fs.read_file(&root, "inbox/capture.org").await.unwrap();
    assert_eq!(contents.text, "* TODO");
}

#[tokio::test]
async fn test_create_existing_name_collides() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    fs.create_file(&root, "", "notes.txt", "first").await.unwrap();

    let result = fs.create_file(&root, "", "notes.txt", "second").await;
    assert!(matches!(result, Err(TreeFsError::AlreadyExists(_))));

    // the original survived the collision
    let contents = fs.read_file(&root, "notes.txt").await.unwrap();
    assert_eq!(contents.text, "first");
}

#[tokio::test]
async fn test_create_under_missing_parent() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    let result = fs.create_file(&root, "nowhere", "a.org", "x").await;
    assert!(matches!(result, Err(TreeFsError::NotFound(_))));
}

#[tokio::test]
async fn test_create_under_file_parent() {
    let (fs, root, dir, _temp) = common::setup_test_env().await;

    std::fs::write(dir.join("plain.txt"), "text").unwrap();

    let result = fs.create_file(&root, "plain.txt", "a.org", "x").await;
    assert!(matches!(result, Err(TreeFsError::NotADirectory(_))));
}

#[tokio::test]
async fn test_create_rejects_bad_names() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    for name in ["", "..", "a/b", "a\\b"] {
        let result = fs.create_file(&root, "", name, "x").await;
        assert!(
            matches!(result, Err(TreeFsError::InvalidPath(_))),
            "name {:?}",
            name
        );
    }
}

/// Provider wrapper whose write path can be switched off, to observe
/// the create-then-write gap.
struct FlakyWrites {
    inner: LocalProvider,
    fail_writes: AtomicBool,
}

#[async_trait::async_trait]
impl TreeProvider for FlakyWrites {
    async fn access(&self, root: &RootId) -> Result<Option<Rights>, ProviderError> {
        self.inner.access(root).await
    }

    async fn stat(&self, node: &NodeId) -> Result<Option<NodeStat>, ProviderError> {
        self.inner.stat(node).await
    }

    async fn list(&self, node: &NodeId) -> Result<Vec<String>, ProviderError> {
        self.inner.list(node).await
    }

    async fn read(&self, node: &NodeId) -> Result<Vec<u8>, ProviderError> {
        self.inner.read(node).await
    }

    async fn write(&self, node: &NodeId, bytes: &[u8]) -> Result<(), ProviderError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ProviderError::Io(std::io::Error::other("disk on fire")));
        }
        self.inner.write(node, bytes).await
    }

    async fn create(&self, node: &NodeId, mime: &Mime) -> Result<(), ProviderError> {
        self.inner.create(node, mime).await
    }

    async fn delete(&self, node: &NodeId) -> Result<bool, ProviderError> {
        self.inner.delete(node).await
    }
}

#[tokio::test]
async fn test_failed_initial_write_leaves_empty_node() {
    let temp = tempfile::TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();

    let provider = Arc::new(FlakyWrites {
        inner: LocalProvider::new(),
        fail_writes: AtomicBool::new(false),
    });
    let grants = GrantStore::open(temp.path().join("grants.toml")).unwrap();
    let fs = TreeFs::new(provider.clone(), Arc::new(grants));
    let grant = fs
        .request_root(&LocalPicker::new(&data_dir))
        .await
        .unwrap();

    provider.fail_writes.store(true, Ordering::SeqCst);
    let result = fs.create_file(&grant.root_id, "", "orphan.org", "body").await;
    assert!(matches!(result, Err(TreeFsError::Provider(_))));

    // creation is not rolled back: the empty node stays visible
    provider.fail_writes.store(false, Ordering::SeqCst);
    let records = fs.list_directory(&grant.root_id, "").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "orphan.org");
    assert_eq!(records[0].size, Some(0));
}
