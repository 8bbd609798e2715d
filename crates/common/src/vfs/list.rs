use crate::provider::TreeProvider;

use super::error::TreeFsError;
use super::meta::{self, FileMeta};
use super::node::NodeId;

/// Enumerate a directory's immediate children as projected records.
///
/// The node must exist and be a directory. Each child is projected
/// individually so every field is read fresh; ordering is whatever
/// the provider yields. The whole listing is materialized at once -
/// a snapshot with no live-update or pagination guarantees.
pub async fn list(
    provider: &dyn TreeProvider,
    node: &NodeId,
) -> Result<Vec<FileMeta>, TreeFsError> {
    let stat = provider
        .stat(node)
        .await?
        .ok_or_else(|| TreeFsError::NotFound(node.to_string()))?;
    if !stat.kind.is_dir() {
        return Err(TreeFsError::NotADirectory(node.to_string()));
    }

    let names = provider.list(node).await?;
    let mut records = Vec::with_capacity(names.len());
    for name in names {
        records.push(meta::project(provider, &node.child(&name), false).await?);
    }
    Ok(records)
}
