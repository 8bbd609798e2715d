use std::path::{Path, PathBuf};

use mime::Mime;
use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;

use crate::grant::{Rights, RootId};
use crate::vfs::negotiate::{PendingPick, PickOutcome, RootPicker, Selection};
use crate::vfs::NodeId;

use super::{NodeKind, NodeStat, ProviderError, TreeProvider};

/// [`TreeProvider`] backed by the local filesystem.
///
/// A root token is the canonical path of the granted directory, so
/// tokens stay valid across restarts without any registry. Access is
/// considered revoked once the directory no longer exists or can no
/// longer be read.
#[derive(Debug, Clone, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }

    /// Mint a root token for a directory, as the platform picker
    /// would after the user selects it.
    pub fn register(dir: impl AsRef<Path>) -> Result<(RootId, Rights), ProviderError> {
        let canonical = std::fs::canonicalize(dir)?;
        let meta = std::fs::metadata(&canonical)?;
        if !meta.is_dir() {
            return Err(ProviderError::Refused);
        }
        let rights = Rights {
            read: true,
            write: !meta.permissions().readonly(),
        };
        Ok((RootId::new(canonical.to_string_lossy()), rights))
    }

    fn base(root: &RootId) -> PathBuf {
        PathBuf::from(root.as_str())
    }

    fn locate(node: &NodeId) -> PathBuf {
        let mut path = Self::base(node.root_id());
        for segment in node.segments() {
            path.push(segment);
        }
        path
    }

    fn stat_from_metadata(name: String, meta: &std::fs::Metadata) -> NodeStat {
        NodeStat {
            name,
            kind: if meta.is_dir() {
                NodeKind::Directory
            } else {
                NodeKind::File
            },
            size: meta.len(),
            modified: meta.modified().ok().map(OffsetDateTime::from),
            // plain filesystems do not track content types
            mime: None,
        }
    }
}

#[async_trait::async_trait]
impl TreeProvider for LocalProvider {
    async fn access(&self, root: &RootId) -> Result<Option<Rights>, ProviderError> {
        match tokio::fs::metadata(Self::base(root)).await {
            Ok(meta) if meta.is_dir() => Ok(Some(Rights {
                read: true,
                write: !meta.permissions().readonly(),
            })),
            Ok(_) => Ok(None),
            Err(e) if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn stat(&self, node: &NodeId) -> Result<Option<NodeStat>, ProviderError> {
        let path = Self::locate(node);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => {
                let name = match node.name() {
                    Some(name) => name.to_string(),
                    None => path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                };
                Ok(Some(Self::stat_from_metadata(name, &meta)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, node: &NodeId) -> Result<Vec<String>, ProviderError> {
        let mut entries = tokio::fs::read_dir(Self::locate(node)).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    async fn read(&self, node: &NodeId) -> Result<Vec<u8>, ProviderError> {
        Ok(tokio::fs::read(Self::locate(node)).await?)
    }

    async fn write(&self, node: &NodeId, bytes: &[u8]) -> Result<(), ProviderError> {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(false)
            .open(Self::locate(node))
            .await?;
        file.write_all(bytes).await?;
        // handle released on return, success or failure
        file.flush().await?;
        Ok(())
    }

    async fn create(&self, node: &NodeId, _mime: &Mime) -> Result<(), ProviderError> {
        tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(Self::locate(node))
            .await?;
        Ok(())
    }

    async fn delete(&self, node: &NodeId) -> Result<bool, ProviderError> {
        Ok(tokio::fs::remove_file(Self::locate(node)).await.is_ok())
    }
}

/// Non-interactive stand-in for the platform directory picker.
///
/// "Selects" the directory it was constructed with, the way a user
/// would in the real dialog. Pointing it at a missing path behaves
/// like dismissing the dialog.
#[derive(Debug, Clone)]
pub struct LocalPicker {
    dir: PathBuf,
    force_read_only: bool,
}

impl LocalPicker {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            force_read_only: false,
        }
    }

    /// Simulate a selection that only exposes read access.
    pub fn read_only(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            force_read_only: true,
        }
    }
}

#[async_trait::async_trait]
impl RootPicker for LocalPicker {
    async fn pick(&self) -> PendingPick {
        let (ticket, pending) = PendingPick::channel();
        match LocalProvider::register(&self.dir) {
            Ok((root_id, mut rights)) => {
                if self.force_read_only {
                    rights.write = false;
                }
                ticket.resolve(PickOutcome::Selected(Selection { root_id, rights }));
            }
            Err(_) => ticket.resolve(PickOutcome::Dismissed),
        }
        pending
    }
}
