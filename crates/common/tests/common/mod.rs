//! Shared test utilities for tree filesystem integration tests
#![allow(dead_code)]

use std::sync::Arc;

use common::grant::{GrantStore, RootId};
use common::provider::{LocalPicker, LocalProvider};
use common::vfs::TreeFs;
use tempfile::TempDir;

/// Set up a [`TreeFs`] over a freshly granted empty directory.
///
/// Returns the facade, the granted root id, the path of the granted
/// directory, and the temp dir guard keeping everything alive.
pub async fn setup_test_env() -> (TreeFs, RootId, std::path::PathBuf, TempDir) {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();

    let grants = GrantStore::open(temp.path().join("grants.toml")).unwrap();
    let fs = TreeFs::new(Arc::new(LocalProvider::new()), Arc::new(grants));

    let grant = fs
        .request_root(&LocalPicker::new(&data_dir))
        .await
        .unwrap();

    // the provider canonicalizes the picked directory
    let data_dir = std::fs::canonicalize(&data_dir).unwrap();
    (fs, grant.root_id, data_dir, temp)
}
