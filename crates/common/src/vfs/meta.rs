use mime::Mime;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::provider::{NodeKind, NodeStat, TreeProvider};

use super::error::TreeFsError;
use super::node::NodeId;

/// Serialize an optional MIME type as its plain string form.
mod mime_field {
    use std::str::FromStr;

    use mime::Mime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Mime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(mime) => serializer.serialize_some(mime.as_ref()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Mime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| Mime::from_str(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Name and address of a node's containing directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    pub name: String,
}

/// Read-only snapshot of one node's attributes.
///
/// Recomputed on every query; never cached. `kind` makes the
/// file/directory distinction exactly-one-of by construction, and
/// `size` is only carried for files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Full node address (root token plus relative path).
    pub id: String,
    /// Path relative to the granted root, empty for the root itself.
    pub path: String,
    pub name: String,
    #[serde(with = "mime_field", default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<Mime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub modified: Option<OffsetDateTime>,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
}

impl FileMeta {
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// ISO-8601 rendering of the modification time, for display.
    pub fn last_modified_iso(&self) -> Option<String> {
        self.modified.and_then(|m| m.format(&Rfc3339).ok())
    }
}

fn from_stat(node: &NodeId, stat: NodeStat, parent: Option<ParentRef>) -> FileMeta {
    let mime = match stat.kind {
        NodeKind::File => stat
            .mime
            .or_else(|| mime_guess::from_path(&stat.name).first()),
        NodeKind::Directory => None,
    };
    FileMeta {
        id: node.to_string(),
        path: node.rel_path(),
        name: stat.name,
        mime,
        size: match stat.kind {
            NodeKind::File => Some(stat.size),
            NodeKind::Directory => None,
        },
        modified: stat.modified,
        kind: stat.kind,
        parent,
    }
}

/// Project a node's live attributes into a [`FileMeta`].
///
/// The node must exist; a missing node is `NotFound`, never a
/// partial record. With `with_parent`, the containing directory is
/// stat'd as well and referenced by id and name.
pub async fn project(
    provider: &dyn TreeProvider,
    node: &NodeId,
    with_parent: bool,
) -> Result<FileMeta, TreeFsError> {
    let stat = provider
        .stat(node)
        .await?
        .ok_or_else(|| TreeFsError::NotFound(node.to_string()))?;

    let parent = if with_parent && !node.is_root() {
        let parent_node = node.parent();
        provider.stat(&parent_node).await?.map(|p| ParentRef {
            id: parent_node.to_string(),
            name: p.name,
        })
    } else {
        None
    };

    Ok(from_stat(node, stat, parent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grant::RootId;

    fn stat(name: &str, kind: NodeKind, size: u64) -> NodeStat {
        NodeStat {
            name: name.to_string(),
            kind,
            size,
            modified: None,
            mime: None,
        }
    }

    #[test]
    fn test_size_only_for_files() {
        let root = RootId::new("/base");
        let file = NodeId::resolve(root.clone(), "a.org").unwrap();
        let meta = from_stat(&file, stat("a.org", NodeKind::File, 42), None);
        assert!(meta.is_file());
        assert_eq!(meta.size, Some(42));

        let dir = NodeId::resolve(root, "sub").unwrap();
        let meta = from_stat(&dir, stat("sub", NodeKind::Directory, 4096), None);
        assert!(meta.is_dir());
        assert_eq!(meta.size, None);
    }

    #[test]
    fn test_mime_guessed_from_name() {
        let root = RootId::new("/base");
        let node = NodeId::resolve(root.clone(), "report.json").unwrap();
        let meta = from_stat(&node, stat("report.json", NodeKind::File, 1), None);
        assert_eq!(meta.mime.as_ref().map(|m| m.as_ref()), Some("application/json"));

        // directories never carry a type
        let dir = NodeId::resolve(root, "data.json").unwrap();
        let meta = from_stat(&dir, stat("data.json", NodeKind::Directory, 0), None);
        assert_eq!(meta.mime, None);
    }

    #[test]
    fn test_provider_mime_wins_over_guess() {
        let root = RootId::new("/base");
        let node = NodeId::resolve(root, "notes.org").unwrap();
        let mut s = stat("notes.org", NodeKind::File, 7);
        s.mime = Some("text/plain".parse().unwrap());
        let meta = from_stat(&node, s, None);
        assert_eq!(meta.mime.as_ref().map(|m| m.as_ref()), Some("text/plain"));
    }

    #[test]
    fn test_serde_mime_as_string() {
        let root = RootId::new("/base");
        let node = NodeId::resolve(root, "a.json").unwrap();
        let meta = from_stat(&node, stat("a.json", NodeKind::File, 3), None);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["mime"], "application/json");
        assert_eq!(json["kind"], "file");

        let decoded: FileMeta = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, meta);
    }
}
