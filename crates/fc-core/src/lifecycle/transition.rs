//! Local lifecycle advance after a successful mutation, ahead of the next
//! authoritative read.

use tracing::warn;

use super::DeviceLifecycleState;
use crate::action::NodeAction;
use crate::node::Platform;

/// A mutation the server accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    LockIssued,
    WipeIssued,
    UnlockIssued,
    /// Apple unlock: the server handed out the unlock PIN.
    UnlockPinRevealed,
}

impl LifecycleEvent {
    /// Event produced by a successful dispatch of `action`, if any.
    ///
    /// Only lock, unlock and wipe touch the lifecycle.
    pub fn from_dispatch(action: NodeAction, platform: Platform) -> Option<Self> {
        match action {
            NodeAction::Lock => Some(LifecycleEvent::LockIssued),
            NodeAction::Wipe => Some(LifecycleEvent::WipeIssued),
            NodeAction::Unlock if platform.is_apple() => Some(LifecycleEvent::UnlockPinRevealed),
            NodeAction::Unlock => Some(LifecycleEvent::UnlockIssued),
            NodeAction::Transfer
            | NodeAction::Query
            | NodeAction::RunScript
            | NodeAction::DiskEncryption
            | NodeAction::MdmOff
            | NodeAction::Delete => None,
        }
    }
}

pub struct OptimisticTransition;

impl OptimisticTransition {
    pub fn apply(state: DeviceLifecycleState, event: LifecycleEvent) -> DeviceLifecycleState {
        use DeviceLifecycleState as S;

        match (state, event) {
            // ===== Terminal =====
            (state @ (S::Wiped | S::Wiping), LifecycleEvent::WipeIssued) => state,
            (state @ (S::Wiped | S::Wiping), event) => {
                warn!(?state, ?event, "ignoring lifecycle transition out of wipe");
                state
            }

            // ===== Issued commands =====
            (_, LifecycleEvent::LockIssued) => S::Locking,
            (_, LifecycleEvent::WipeIssued) => S::Wiping,
            (_, LifecycleEvent::UnlockIssued) => S::Unlocking,

            // ===== Apple PIN =====
            (S::Locked, LifecycleEvent::UnlockPinRevealed) => S::Unlocking,
            (state, LifecycleEvent::UnlockPinRevealed) => state,
        }
    }
}
