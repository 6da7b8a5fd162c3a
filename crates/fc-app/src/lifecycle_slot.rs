//! The lifecycle slice owned by the node view.
//!
//! The view keeps the receiver and re-renders when it changes. Use cases hold
//! the slot. Once the view is gone every write is a silent no-op.

use fc_core::lifecycle::{DeviceLifecycleState, LifecycleEvent, OptimisticTransition};
use fc_core::NodeRecord;
use tokio::sync::watch;
use tracing::debug;

pub type LifecycleView = watch::Receiver<DeviceLifecycleState>;

pub struct LifecycleSlot {
    tx: watch::Sender<DeviceLifecycleState>,
}

impl LifecycleSlot {
    pub fn new(initial: DeviceLifecycleState) -> (Self, LifecycleView) {
        let (tx, rx) = watch::channel(initial);
        (Self { tx }, rx)
    }

    /// Slot seeded from a freshly loaded record.
    pub fn for_record(node: &NodeRecord) -> (Self, LifecycleView) {
        Self::new(DeviceLifecycleState::resolve(
            node.mdm.device_status,
            node.mdm.pending_action,
        ))
    }

    pub fn current(&self) -> DeviceLifecycleState {
        *self.tx.borrow()
    }

    /// The view still listens.
    pub fn is_mounted(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Advance optimistically after a successful mutation.
    ///
    /// Returns the published state, or `None` when the view is gone.
    pub fn apply(&self, event: LifecycleEvent) -> Option<DeviceLifecycleState> {
        let next = OptimisticTransition::apply(self.current(), event);
        self.publish(next)
    }

    /// Replace the local state with the one the server reports.
    pub fn reconcile(&self, node: &NodeRecord) -> Option<DeviceLifecycleState> {
        self.publish(DeviceLifecycleState::resolve(
            node.mdm.device_status,
            node.mdm.pending_action,
        ))
    }

    fn publish(&self, state: DeviceLifecycleState) -> Option<DeviceLifecycleState> {
        match self.tx.send(state) {
            Ok(()) => Some(state),
            Err(_) => {
                debug!(%state, "lifecycle view dropped, discarding update");
                None
            }
        }
    }
}
