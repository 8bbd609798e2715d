/**
 * Root grants and their durable store.
 *  A grant is a user-authorized capability to
 *  read/write one directory tree, obtained once
 *  through an interactive picker and persisted
 *  across restarts.
 */
pub mod grant;
/**
 * The storage capability consumed by the core.
 *  One opaque handle per granted root that can be
 *  stat'd, enumerated, read, and written. Ships
 *  with a local-directory implementation.
 */
pub mod provider;
/**
 * The virtual filesystem itself: path resolution
 *  inside a granted root, metadata projection,
 *  directory listing, and whole-file IO.
 */
pub mod vfs;

pub mod prelude {
    pub use crate::grant::{GrantStore, Rights, RootGrant, RootId};
    pub use crate::provider::{LocalPicker, LocalProvider, TreeProvider};
    pub use crate::vfs::{FileContents, FileMeta, NodeId, TreeFs, TreeFsError};
}
