//! Build the action menu for one node.

use serde::Serialize;
use tracing::debug;

use fc_core::lifecycle::{DeviceLifecycleState, DeviceStatusTag};
use fc_core::{ActionDescriptor, ActionEligibilityEngine, NodeActionContext, NodeRecord, Session};

/// What the node view renders for the action area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeActionsView {
    pub lifecycle: DeviceLifecycleState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_tag: Option<DeviceStatusTag>,
    /// Empty means "render no menu at all".
    pub actions: Vec<ActionDescriptor>,
}

#[derive(Debug, Default)]
pub struct ListNodeActions;

impl ListNodeActions {
    pub fn new() -> Self {
        Self
    }

    /// `session` is `None` until the acting user is loaded; nothing is
    /// offered in that case.
    pub fn execute(
        &self,
        node: &NodeRecord,
        session: Option<&Session>,
        lifecycle: DeviceLifecycleState,
    ) -> NodeActionsView {
        let status_tag = DeviceStatusTag::for_state(lifecycle);

        let Some(session) = session else {
            debug!(node_id = %node.id, "no session loaded, offering no actions");
            return NodeActionsView {
                lifecycle,
                status_tag,
                actions: Vec::new(),
            };
        };

        let ctx = NodeActionContext::new(node, session, lifecycle);
        let actions = ActionEligibilityEngine::evaluate(&ctx);
        debug!(
            node_id = %node.id,
            platform = %node.platform,
            %lifecycle,
            offered = actions.len(),
            "evaluated node actions"
        );

        NodeActionsView {
            lifecycle,
            status_tag,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::node::{NodeStatus, Platform};
    use fc_core::{ActingUser, NodeAction, NodeId, Role, SubscriptionTier};

    fn linux_node() -> NodeRecord {
        let mut node = NodeRecord::new(NodeId::new(3), Platform::Ubuntu);
        node.status = NodeStatus::Online;
        node
    }

    #[test]
    fn missing_session_offers_nothing() {
        let view = ListNodeActions::new().execute(&linux_node(), None, DeviceLifecycleState::Unlocked);

        assert!(view.actions.is_empty());
        assert!(view.status_tag.is_none());
    }

    #[test]
    fn maintainer_gets_lock_on_linux() {
        let session = Session {
            user: ActingUser::global(Role::Maintainer),
            tier: SubscriptionTier::Premium,
            ..Session::default()
        };

        let view = ListNodeActions::new().execute(
            &linux_node(),
            Some(&session),
            DeviceLifecycleState::Unlocked,
        );

        let values: Vec<NodeAction> = view.actions.iter().map(|a| a.value).collect();
        assert_eq!(
            values,
            vec![
                NodeAction::Transfer,
                NodeAction::Query,
                NodeAction::RunScript,
                NodeAction::Lock,
                NodeAction::Wipe,
                NodeAction::Delete,
            ]
        );
    }

    #[test]
    fn pending_state_carries_status_tag() {
        let view = ListNodeActions::new().execute(
            &linux_node(),
            Some(&Session::default()),
            DeviceLifecycleState::Locking,
        );

        assert_eq!(view.status_tag.map(|t| t.title), Some("LOCK PENDING"));
    }

    #[test]
    fn view_serializes_camel_case_and_skips_missing_tag() {
        let session = Session {
            user: ActingUser::global(Role::Admin),
            tier: SubscriptionTier::Premium,
            ..Session::default()
        };
        let list = ListNodeActions::new();

        let unlocked = serde_json::to_value(list.execute(
            &linux_node(),
            Some(&session),
            DeviceLifecycleState::Unlocked,
        ))
        .unwrap();
        assert_eq!(unlocked["lifecycle"], "unlocked");
        assert!(unlocked.get("statusTag").is_none());
        assert!(unlocked.get("status_tag").is_none());
        assert_eq!(unlocked["actions"][0]["value"], "transfer");

        let locking = serde_json::to_value(list.execute(
            &linux_node(),
            Some(&session),
            DeviceLifecycleState::Locking,
        ))
        .unwrap();
        assert_eq!(locking["lifecycle"], "locking");
        assert_eq!(locking["statusTag"]["title"], "LOCK PENDING");
    }
}
