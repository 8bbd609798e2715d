use percent_encoding::percent_decode_str;

use crate::grant::RootId;

use super::error::TreeFsError;

/// Resolved address of a node inside a granted root.
///
/// Built only by appending percent-decoded segments onto the root's
/// own identifier - never by gluing caller strings onto arbitrary
/// addresses - so a resolved node can never sit outside its root.
/// Derived per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeId {
    root_id: RootId,
    segments: Vec<String>,
}

impl NodeId {
    /// The root's own identifier.
    pub fn root(root_id: RootId) -> Self {
        Self {
            root_id,
            segments: Vec::new(),
        }
    }

    /// Resolve a caller-supplied relative path against a root.
    ///
    /// An empty path addresses the root itself. Otherwise one
    /// leading separator is stripped, the remainder split on `/` and
    /// each segment percent-decoded. Traversal segments (`..`, also
    /// in encoded form), separators smuggled inside a segment, and
    /// byte sequences that do not decode as UTF-8 are all rejected.
    /// Empty segments (`a//b`, trailing `/`) are skipped.
    pub fn resolve(root_id: RootId, relative: &str) -> Result<Self, TreeFsError> {
        let rel = relative.strip_prefix('/').unwrap_or(relative);
        let mut segments = Vec::new();
        for raw in rel.split('/') {
            if raw.is_empty() {
                continue;
            }
            let segment = percent_decode_str(raw)
                .decode_utf8()
                .map_err(|_| TreeFsError::InvalidPath(relative.to_string()))?
                .into_owned();
            if segment == ".." || segment.contains('/') || segment.contains('\\') {
                return Err(TreeFsError::InvalidPath(relative.to_string()));
            }
            segments.push(segment);
        }
        Ok(Self { root_id, segments })
    }

    /// Address of the containing directory, computed by dropping the
    /// last segment. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self {
            root_id: self.root_id.clone(),
            segments,
        }
    }

    /// Address of a direct child. The name is taken literally; it is
    /// the caller's job to pass a name the backend reported or one
    /// that already passed resolution.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self {
            root_id: self.root_id.clone(),
            segments,
        }
    }

    pub fn root_id(&self) -> &RootId {
        &self.root_id
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path relative to the root, `/`-joined, empty for the root.
    pub fn rel_path(&self) -> String {
        self.segments.join("/")
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            write!(f, "{}", self.root_id)
        } else {
            write!(f, "{}/{}", self.root_id, self.rel_path())
        }
    }
}
