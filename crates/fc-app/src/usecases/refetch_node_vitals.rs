//! Ask a node to refetch its vitals and poll until the agent reports back.
//!
//! Every fetched record is authoritative: its lifecycle state replaces
//! whatever the view advanced optimistically.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};

use fc_core::ports::{NodeDetailError, NodeDetailPort};
use fc_core::{AppConfig, NodeId, NodeRecord};

use crate::lifecycle_slot::LifecycleSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefetchPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for RefetchPolicy {
    /// Once a second for up to a minute.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }
}

impl From<&AppConfig> for RefetchPolicy {
    fn from(config: &AppConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.refetch_interval_ms),
            max_attempts: config.refetch_max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefetchNodeVitalsError {
    #[error(transparent)]
    Detail(#[from] NodeDetailError),
    #[error("node still refetching after {attempts} polls")]
    TimedOut { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefetchOutcome {
    /// The agent reported fresh vitals.
    Refreshed(NodeRecord),
    /// The view went away; polling stopped.
    Abandoned,
}

pub struct RefetchNodeVitals {
    detail: Arc<dyn NodeDetailPort>,
    policy: RefetchPolicy,
}

impl RefetchNodeVitals {
    pub fn new(detail: Arc<dyn NodeDetailPort>, policy: RefetchPolicy) -> Self {
        Self { detail, policy }
    }

    pub async fn execute(
        &self,
        node_id: NodeId,
        slot: &LifecycleSlot,
    ) -> Result<RefetchOutcome, RefetchNodeVitalsError> {
        let span = info_span!("usecase.refetch_node_vitals.execute", %node_id);

        async move {
            self.detail.refetch_node(node_id).await?;
            info!(max_attempts = self.policy.max_attempts, "vitals refetch requested");

            for attempt in 1..=self.policy.max_attempts {
                if !slot.is_mounted() {
                    debug!(attempt, "view unmounted, abandoning refetch poll");
                    return Ok(RefetchOutcome::Abandoned);
                }

                tokio::time::sleep(self.policy.interval).await;

                let node = self.detail.get_node(node_id).await?;
                slot.reconcile(&node);

                if !node.refetch_requested {
                    info!(attempt, "node vitals refreshed");
                    return Ok(RefetchOutcome::Refreshed(node));
                }
                debug!(attempt, "node still refetching");
            }

            warn!(
                attempts = self.policy.max_attempts,
                "gave up waiting for node vitals"
            );
            Err(RefetchNodeVitalsError::TimedOut {
                attempts: self.policy.max_attempts,
            })
        }
        .instrument(span)
        .await
    }
}
