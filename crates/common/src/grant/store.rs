use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{RootGrant, RootId};

/// On-disk format version. Bump when the table schema changes.
const GRANTS_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct GrantsFile {
    version: u32,
    #[serde(default)]
    grants: Vec<RootGrant>,
}

#[derive(Debug, thiserror::Error)]
pub enum GrantStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grant table is not valid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode grant table: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("unsupported grant table version {0} (expected {GRANTS_VERSION})")]
    UnsupportedVersion(u32),
}

/// Durable table of root grants.
///
/// The only process-wide mutable state in the core. The in-memory
/// table is guarded by a mutex so concurrent saves for the same root
/// serialize (last write wins); every save rewrites the backing file
/// through a temp-file rename so a crash never leaves a torn table.
///
/// `get` is pure storage lookup. Re-validating that the platform
/// still honors a grant needs the provider capability and lives in
/// [`TreeFs`](crate::vfs::TreeFs), which performs it on every
/// operation.
pub struct GrantStore {
    path: PathBuf,
    table: Mutex<BTreeMap<RootId, RootGrant>>,
}

impl GrantStore {
    /// Open the grant table at `path`, creating an empty one if the
    /// file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GrantStoreError> {
        let path = path.as_ref().to_path_buf();
        let table = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let file: GrantsFile = toml::from_str(&raw)?;
            if file.version != GRANTS_VERSION {
                return Err(GrantStoreError::UnsupportedVersion(file.version));
            }
            file.grants
                .into_iter()
                .map(|g| (g.root_id.clone(), g))
                .collect()
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    /// Insert or replace the grant for its root and flush the table.
    ///
    /// The lock is held across the file rewrite so concurrent saves
    /// cannot flush out of order and resurrect an older table on
    /// disk.
    pub fn save(&self, grant: &RootGrant) -> Result<(), GrantStoreError> {
        let mut table = self.table.lock();
        table.insert(grant.root_id.clone(), grant.clone());
        self.flush(&table)
    }

    /// Look up the grant for a root.
    pub fn get(&self, root_id: &RootId) -> Option<RootGrant> {
        self.table.lock().get(root_id).cloned()
    }

    /// Snapshot of every stored grant, ordered by root id.
    pub fn all(&self) -> Vec<RootGrant> {
        self.table.lock().values().cloned().collect()
    }

    fn flush(&self, table: &BTreeMap<RootId, RootGrant>) -> Result<(), GrantStoreError> {
        let file = GrantsFile {
            version: GRANTS_VERSION,
            grants: table.values().cloned().collect(),
        };
        let encoded = toml::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
