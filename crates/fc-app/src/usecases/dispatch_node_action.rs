//! Accept a menu selection by its string identifier.

use std::sync::Arc;

use tracing::{info, warn};

use fc_core::action::ActionParseError;
use fc_core::ports::ActionRouterPort;
use fc_core::{ActionDescriptor, NodeAction, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchActionError {
    #[error(transparent)]
    Parse(#[from] ActionParseError),
    #[error("action {0} is not offered for this node")]
    NotOffered(NodeAction),
    #[error("action {0} is disabled for this node")]
    Disabled(NodeAction),
}

/// Checks a selection against the menu the user was shown and hands accepted
/// actions to the router.
pub struct DispatchNodeAction {
    router: Arc<dyn ActionRouterPort>,
}

impl DispatchNodeAction {
    pub fn new(router: Arc<dyn ActionRouterPort>) -> Self {
        Self { router }
    }

    pub fn execute(
        &self,
        node_id: NodeId,
        value: &str,
        offered: &[ActionDescriptor],
    ) -> Result<NodeAction, DispatchActionError> {
        let action: NodeAction = value.parse()?;

        let descriptor = offered
            .iter()
            .find(|d| d.value == action)
            .ok_or(DispatchActionError::NotOffered(action))?;
        if descriptor.disabled {
            warn!(%node_id, %action, "refusing disabled action");
            return Err(DispatchActionError::Disabled(action));
        }

        info!(%node_id, %action, "dispatching node action");
        self.router.route(node_id, action);
        Ok(action)
    }
}
