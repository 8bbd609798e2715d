//! Root grants
//!
//! A [`RootGrant`] records that the user authorized access to one
//! directory tree. The tree itself is addressed by an opaque
//! [`RootId`] token minted by the storage provider; the core never
//! inspects it. Grants are immutable once created - revocation
//! happens outside the process (the user withdraws access on the
//! platform side) and is observed by re-validating against the
//! provider on every operation.

mod store;

pub use store::{GrantStore, GrantStoreError};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque token addressing a granted root.
///
/// Minted by the provider when the user picks a directory (a tree
/// URI on Android, a canonical path for the local provider). The
/// core treats it as a plain string key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootId(String);

impl RootId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RootId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RootId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for RootId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// The access rights obtained for a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rights {
    pub read: bool,
    pub write: bool,
}

impl Rights {
    pub fn read_write() -> Self {
        Self {
            read: true,
            write: true,
        }
    }

    /// Both rights present. Grants are only issued for full access.
    pub fn is_full(&self) -> bool {
        self.read && self.write
    }
}

/// A persisted authorization for one directory tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootGrant {
    /// Record id, assigned when the grant is taken.
    pub id: Uuid,
    /// Provider token for the granted root.
    pub root_id: RootId,
    /// When the user granted access.
    #[serde(with = "time::serde::rfc3339")]
    pub granted_at: OffsetDateTime,
    /// Rights obtained at grant time.
    pub rights: Rights,
}

impl RootGrant {
    pub fn new(root_id: RootId, rights: Rights) -> Self {
        Self {
            id: Uuid::new_v4(),
            root_id,
            granted_at: OffsetDateTime::now_utc(),
            rights,
        }
    }

    /// RFC 3339 rendering of the grant timestamp, for display.
    pub fn granted_at_iso(&self) -> String {
        self.granted_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.granted_at.to_string())
    }
}
