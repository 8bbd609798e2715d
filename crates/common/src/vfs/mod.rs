//! The virtual filesystem over granted roots
//!
//! Callers address nodes with `(root id, relative path)` pairs; the
//! facade here looks up the grant, re-validates it against the
//! platform, resolves the path inside the root, and dispatches to
//! the listing/projection/IO primitives:
//!
//! - **[`NodeId`]**: resolved node addresses ([`node`])
//! - **[`FileMeta`]**: projected metadata snapshots ([`meta`])
//! - **[`FileContents`]**: whole-file text reads ([`io`])
//! - **[`negotiate`]**: the one-time grant flow
//!
//! Every operation runs to completion on the calling task; the only
//! suspension point is the interactive picker. There is no caching
//! anywhere - the backing store changes out of band.

pub mod negotiate;

mod error;
mod io;
mod list;
mod meta;
mod node;

pub use error::TreeFsError;
pub use io::FileContents;
pub use meta::{FileMeta, ParentRef};
pub use node::NodeId;

use std::sync::Arc;

use crate::grant::{GrantStore, RootGrant, RootId};
use crate::provider::TreeProvider;

use negotiate::RootPicker;

/// Facade over one provider capability and the grant table.
///
/// Cheap to clone; all state lives behind the shared handles.
#[derive(Clone)]
pub struct TreeFs {
    provider: Arc<dyn TreeProvider>,
    grants: Arc<GrantStore>,
}

impl TreeFs {
    pub fn new(provider: Arc<dyn TreeProvider>, grants: Arc<GrantStore>) -> Self {
        Self { provider, grants }
    }

    pub fn grants(&self) -> &GrantStore {
        &self.grants
    }

    /// Drive the interactive picker and persist the resulting grant.
    pub async fn request_root(&self, picker: &dyn RootPicker) -> Result<RootGrant, TreeFsError> {
        negotiate::request_root(picker, &self.grants).await
    }

    /// List the immediate children of a directory inside a root.
    pub async fn list_directory(
        &self,
        root_id: &RootId,
        path: &str,
    ) -> Result<Vec<FileMeta>, TreeFsError> {
        self.authorize(root_id, false).await?;
        let node = NodeId::resolve(root_id.clone(), path)?;
        tracing::debug!(root = %root_id, path, "list directory");
        list::list(self.provider.as_ref(), &node).await
    }

    /// Read a file's full text together with its metadata.
    pub async fn read_file(
        &self,
        root_id: &RootId,
        path: &str,
    ) -> Result<FileContents, TreeFsError> {
        self.authorize(root_id, false).await?;
        let node = NodeId::resolve(root_id.clone(), path)?;
        tracing::debug!(root = %root_id, path, "read file");
        io::read_all(self.provider.as_ref(), &node).await
    }

    /// Overwrite an existing file's contents in full.
    pub async fn write_file(
        &self,
        root_id: &RootId,
        path: &str,
        text: &str,
    ) -> Result<(), TreeFsError> {
        self.authorize(root_id, true).await?;
        let node = NodeId::resolve(root_id.clone(), path)?;
        tracing::debug!(root = %root_id, path, bytes = text.len(), "write file");
        io::write_all(self.provider.as_ref(), &node, text).await
    }

    /// Create a new file under a directory and write its initial
    /// contents. Returns the parent directory's metadata.
    pub async fn create_file(
        &self,
        root_id: &RootId,
        parent_path: &str,
        name: &str,
        contents: &str,
    ) -> Result<FileMeta, TreeFsError> {
        self.authorize(root_id, true).await?;
        let parent = NodeId::resolve(root_id.clone(), parent_path)?;
        tracing::debug!(root = %root_id, parent_path, name, "create file");
        io::create(self.provider.as_ref(), &parent, name, contents, None).await
    }

    /// Delete a file inside a root.
    pub async fn delete_file(&self, root_id: &RootId, path: &str) -> Result<(), TreeFsError> {
        self.authorize(root_id, true).await?;
        let node = NodeId::resolve(root_id.clone(), path)?;
        tracing::debug!(root = %root_id, path, "delete file");
        io::delete(self.provider.as_ref(), &node).await
    }

    /// Look up the grant and re-validate it against the platform.
    ///
    /// Runs on every operation: the stored grant proves the user
    /// authorized the root once, the provider check proves the
    /// platform still honors it now.
    async fn authorize(&self, root_id: &RootId, write: bool) -> Result<RootGrant, TreeFsError> {
        let grant = self
            .grants
            .get(root_id)
            .ok_or_else(|| TreeFsError::RootNotFound(root_id.clone()))?;
        if !grant.rights.read || (write && !grant.rights.write) {
            return Err(TreeFsError::InsufficientPermission);
        }
        match self.provider.access(root_id).await? {
            Some(live) if live.read && (!write || live.write) => Ok(grant),
            _ => {
                tracing::warn!(root = %root_id, "grant no longer honored by platform");
                Err(TreeFsError::GrantRevoked(root_id.clone()))
            }
        }
    }
}
