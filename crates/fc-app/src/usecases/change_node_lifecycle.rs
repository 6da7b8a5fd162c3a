//! Lock, unlock or wipe a node, then advance the local lifecycle state
//! without waiting for the next read.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use fc_core::lifecycle::{DeviceLifecycleState, LifecycleEvent};
use fc_core::ports::{NodeMdmPort, NodeMutationError};
use fc_core::{NodeAction, NodeId, Platform};

use crate::lifecycle_slot::LifecycleSlot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutateNodeError {
    #[error("action {0} does not change the node lifecycle")]
    NotLifecycleAction(NodeAction),
    #[error(transparent)]
    Mutation(#[from] NodeMutationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleChange {
    /// State published to the view; `None` when the view was gone by the time
    /// the server answered.
    pub state: Option<DeviceLifecycleState>,
    /// Apple unlock PIN to show the user.
    pub unlock_pin: Option<String>,
}

pub struct ChangeNodeLifecycle {
    mdm: Arc<dyn NodeMdmPort>,
}

impl ChangeNodeLifecycle {
    pub fn new(mdm: Arc<dyn NodeMdmPort>) -> Self {
        Self { mdm }
    }

    /// A failed request leaves the slot untouched.
    pub async fn execute(
        &self,
        node_id: NodeId,
        platform: Platform,
        action: NodeAction,
        slot: &LifecycleSlot,
    ) -> Result<LifecycleChange, MutateNodeError> {
        let event = LifecycleEvent::from_dispatch(action, platform)
            .ok_or(MutateNodeError::NotLifecycleAction(action))?;

        let span = info_span!(
            "usecase.change_node_lifecycle.execute",
            %node_id,
            %action,
            %platform
        );

        async move {
            let unlock_pin = match action {
                NodeAction::Lock => {
                    self.mdm.lock_node(node_id).await?;
                    None
                }
                NodeAction::Wipe => {
                    self.mdm.wipe_node(node_id).await?;
                    None
                }
                _ => self.mdm.unlock_node(node_id).await?.unlock_pin,
            };
            info!("server accepted lifecycle command");

            let state = slot.apply(event);
            if state.is_none() {
                debug!("view unmounted during request, skipping optimistic transition");
            }

            Ok(LifecycleChange { state, unlock_pin })
        }
        .instrument(span)
        .await
    }
}
