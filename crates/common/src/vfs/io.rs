use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::provider::{ProviderError, TreeProvider};

use super::error::TreeFsError;
use super::meta::{self, FileMeta};
use super::node::NodeId;

/// A file's text together with its metadata snapshot, as produced by
/// [`read_all`]. Ephemeral; nothing in the core retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContents {
    pub meta: FileMeta,
    pub text: String,
}

/// Read a file node in full and decode it as UTF-8 text.
///
/// The metadata snapshot includes a reference to the containing
/// directory. Invalid byte sequences are replaced rather than
/// rejected. The decoded text is reassembled line by line WITHOUT
/// re-inserting line breaks, so a multi-line file comes back as one unbroken
/// string. That matches the long-standing behavior of the wire
/// contract this library replaces and is pinned by tests; callers
/// must not rely on `read_all` being loss-free across line
/// boundaries.
pub async fn read_all(
    provider: &dyn TreeProvider,
    node: &NodeId,
) -> Result<FileContents, TreeFsError> {
    let stat = provider
        .stat(node)
        .await?
        .ok_or_else(|| TreeFsError::NotFound(node.to_string()))?;
    if !stat.kind.is_file() {
        return Err(TreeFsError::NotAFile(node.to_string()));
    }

    let bytes = provider.read(node).await?;
    let text: String = String::from_utf8_lossy(&bytes).lines().collect();
    let meta = meta::project(provider, node, true).await?;
    Ok(FileContents { meta, text })
}

/// Full truncating overwrite of an existing file node.
///
/// Not an append and not a patch; the previous contents are gone
/// entirely. The provider contract guarantees the write handle is
/// flushed and released before this returns, on every exit path.
pub async fn write_all(
    provider: &dyn TreeProvider,
    node: &NodeId,
    text: &str,
) -> Result<(), TreeFsError> {
    if provider.stat(node).await?.is_none() {
        return Err(TreeFsError::NotFound(node.to_string()));
    }
    provider.write(node, text.as_bytes()).await?;
    Ok(())
}

/// Create a new file under `parent` and write its initial contents.
///
/// The leaf is created with `application/octet-stream` unless a type
/// is supplied, then filled via [`write_all`]. The two steps are not
/// atomic: if the write fails after creation succeeded, the empty
/// node is left in place for the caller to see. Returns the parent
/// directory's metadata, mirroring what callers of the original
/// contract expect.
pub async fn create(
    provider: &dyn TreeProvider,
    parent: &NodeId,
    name: &str,
    contents: &str,
    mime: Option<Mime>,
) -> Result<FileMeta, TreeFsError> {
    if name.is_empty() || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(TreeFsError::InvalidPath(name.to_string()));
    }

    let parent_stat = provider
        .stat(parent)
        .await?
        .ok_or_else(|| TreeFsError::NotFound(parent.to_string()))?;
    if !parent_stat.kind.is_dir() {
        return Err(TreeFsError::NotADirectory(parent.to_string()));
    }

    let target = parent.child(name);
    if provider.stat(&target).await?.is_some() {
        return Err(TreeFsError::AlreadyExists(target.to_string()));
    }

    let mime = mime.unwrap_or(mime::APPLICATION_OCTET_STREAM);
    provider.create(&target, &mime).await?;
    provider.write(&target, contents.as_bytes()).await?;

    meta::project(provider, parent, false).await
}

/// Delete a file node.
///
/// A `false` from the provider is reported as a non-specific
/// provider failure - permission, in-use, and backend errors are
/// deliberately not distinguished.
pub async fn delete(provider: &dyn TreeProvider, node: &NodeId) -> Result<(), TreeFsError> {
    if provider.stat(node).await?.is_none() {
        return Err(TreeFsError::NotFound(node.to_string()));
    }
    if !provider.delete(node).await? {
        return Err(TreeFsError::Provider(ProviderError::Refused));
    }
    Ok(())
}
