use crate::action::NodeAction;
use crate::ids::NodeId;

/// Receives an accepted menu selection, typically to open the matching modal.
pub trait ActionRouterPort: Send + Sync {
    fn route(&self, node_id: NodeId, action: NodeAction);
}
