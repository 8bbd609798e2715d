use crate::grant::{GrantStoreError, RootId};
use crate::provider::ProviderError;

/// Failure classification for every virtual filesystem operation.
///
/// Each variant carries the offending root or node address so the
/// boundary that translates these (status codes, rejected promises)
/// has something to report. Nothing here aborts the process and
/// nothing is swallowed.
#[derive(Debug, thiserror::Error)]
pub enum TreeFsError {
    #[error("root not granted: {0}")]
    RootNotFound(RootId),
    #[error("node not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("not a file: {0}")]
    NotAFile(String),
    #[error("invalid relative path: {0}")]
    InvalidPath(String),
    #[error("node already exists: {0}")]
    AlreadyExists(String),
    #[error("grant does not cover the requested access")]
    InsufficientPermission,
    #[error("access to root has been revoked: {0}")]
    GrantRevoked(RootId),
    #[error("directory selection was cancelled")]
    UserCancelled,
    #[error("provider failure: {0}")]
    Provider(#[from] ProviderError),
    #[error("grant store failure: {0}")]
    GrantStore(#[from] GrantStoreError),
}
