//! Root grant negotiation
//!
//! The one-time interactive flow that turns a user's directory
//! selection into a persisted [`RootGrant`]. The picker UI itself is
//! an external capability behind [`RootPicker`]; the only thing the
//! core models is the suspension: a [`PendingPick`] is a single-shot
//! future resolved exactly once by the [`PickTicket`] the UI holds.

use tokio::sync::oneshot;

use crate::grant::{GrantStore, Rights, RootGrant, RootId};

use super::error::TreeFsError;

/// What the user picked: a root token plus the rights the platform
/// actually exposed for it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub root_id: RootId,
    pub rights: Rights,
}

#[derive(Debug)]
pub enum PickOutcome {
    Selected(Selection),
    /// The user dismissed the dialog, or the selection was unusable.
    Dismissed,
}

/// Resolver side of a pending pick. Consumed on resolution, so the
/// outcome can be delivered at most once.
pub struct PickTicket {
    tx: oneshot::Sender<PickOutcome>,
}

impl PickTicket {
    pub fn resolve(self, outcome: PickOutcome) {
        // the waiter may already be gone; nothing to do then
        let _ = self.tx.send(outcome);
    }
}

/// Awaitable side of a pending pick.
pub struct PendingPick {
    rx: oneshot::Receiver<PickOutcome>,
}

impl PendingPick {
    pub fn channel() -> (PickTicket, PendingPick) {
        let (tx, rx) = oneshot::channel();
        (PickTicket { tx }, PendingPick { rx })
    }

    /// Suspend until the picker resolves. A ticket dropped without
    /// resolving (UI torn down) counts as a dismissal.
    pub async fn wait(self) -> PickOutcome {
        self.rx.await.unwrap_or(PickOutcome::Dismissed)
    }
}

/// The platform's directory-selection affordance.
#[async_trait::async_trait]
pub trait RootPicker: Send + Sync {
    /// Launch the selection flow and hand back the pending outcome.
    async fn pick(&self) -> PendingPick;
}

/// Drive the picker to completion and persist the resulting grant.
///
/// Fails `UserCancelled` on dismissal, `InsufficientPermission` when
/// the selection does not expose both read and write. On success the
/// grant is written to the store before it is returned, so there is
/// never a live grant the store does not know about.
pub async fn request_root(
    picker: &dyn RootPicker,
    store: &GrantStore,
) -> Result<RootGrant, TreeFsError> {
    let pending = picker.pick().await;
    match pending.wait().await {
        PickOutcome::Dismissed => Err(TreeFsError::UserCancelled),
        PickOutcome::Selected(selection) => {
            if !selection.rights.is_full() {
                return Err(TreeFsError::InsufficientPermission);
            }
            let grant = RootGrant::new(selection.root_id, selection.rights);
            store.save(&grant)?;
            tracing::debug!(root = %grant.root_id, "granted new root");
            Ok(grant)
        }
    }
}
