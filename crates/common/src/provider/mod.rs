//! Storage capability
//!
//! The core never touches a filesystem directly. It consumes one
//! [`TreeProvider`] capability that materializes nodes for every
//! granted root: validate continued access, stat a node, enumerate a
//! directory, and move whole byte payloads in and out. The original
//! backend for this contract is a platform document provider; the
//! [`LocalProvider`] shipped here backs it with a local directory
//! and is what the CLI and the tests run against.

mod local;

pub use local::{LocalPicker, LocalProvider};

use mime::Mime;
use time::OffsetDateTime;

use crate::grant::{Rights, RootId};
use crate::vfs::NodeId;

/// Live attributes of one node, read fresh from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStat {
    /// Display name (last path segment, or the root's own name).
    pub name: String,
    pub kind: NodeKind,
    /// Payload size in bytes. Meaningless for directories.
    pub size: u64,
    pub modified: Option<OffsetDateTime>,
    /// Content type when the backend tracks one. Local filesystems
    /// do not, so the projector falls back to guessing by name.
    pub mime: Option<Mime>,
}

/// A node is exactly one of file or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("provider refused the operation")]
    Refused,
}

/// Capability handle over every granted root.
///
/// `stat` and `list` report on whatever exists right now; nothing is
/// cached because the backing store changes out of band (other apps,
/// sync clients). Write-path methods must flush and release their
/// handle before returning, so sequential callers observe each
/// other's effects.
#[async_trait::async_trait]
pub trait TreeProvider: Send + Sync {
    /// Re-check that the platform still honors access to `root`.
    ///
    /// Returns the rights currently honored, or `None` when access
    /// has been withdrawn. Called on every operation, not only at
    /// startup - revocation can happen at any time.
    async fn access(&self, root: &RootId) -> Result<Option<Rights>, ProviderError>;

    /// Attributes of the addressed node, or `None` if it does not exist.
    async fn stat(&self, node: &NodeId) -> Result<Option<NodeStat>, ProviderError>;

    /// Names of the immediate children of a directory node, in
    /// whatever order the backend yields them.
    async fn list(&self, node: &NodeId) -> Result<Vec<String>, ProviderError>;

    /// Full byte payload of a file node.
    async fn read(&self, node: &NodeId) -> Result<Vec<u8>, ProviderError>;

    /// Truncating overwrite of an existing file node.
    async fn write(&self, node: &NodeId, bytes: &[u8]) -> Result<(), ProviderError>;

    /// Create an empty leaf node. `mime` is advisory; backends that
    /// do not track content types ignore it.
    async fn create(&self, node: &NodeId, mime: &Mime) -> Result<(), ProviderError>;

    /// Delete a node. `false` means the backend refused without
    /// saying why - callers must treat it as a non-specific failure.
    async fn delete(&self, node: &NodeId) -> Result<bool, ProviderError>;
}
