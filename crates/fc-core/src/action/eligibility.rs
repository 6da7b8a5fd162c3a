//! Two-pass action engine.
//!
//! 1. Filter: walk the canonical action list and keep the actions whose
//!    capability predicate holds.
//! 2. Disable: over the survivors, apply each disable rule; every action a
//!    matching rule names is disabled with a tooltip for that rule's reason.
//!
//! Both passes are table-driven and pure. The same context always yields the
//! same list.

use super::capability;
use super::tooltip::{disabled_tooltip, DisableReason};
use super::{ActionDescriptor, NodeAction, NodeActionContext};
use crate::node::Platform;

type Predicate = fn(&NodeActionContext) -> bool;

/// Action → applicability, in canonical menu order.
const ELIGIBILITY: [(NodeAction, Predicate); 9] = [
    (NodeAction::Transfer, capability::can_transfer_team),
    (NodeAction::Query, capability::can_query_node),
    (NodeAction::RunScript, capability::can_run_script),
    (NodeAction::DiskEncryption, capability::can_show_disk_encryption),
    (NodeAction::MdmOff, capability::can_edit_mdm),
    (NodeAction::Lock, capability::can_lock_node),
    (NodeAction::Wipe, capability::can_wipe_node),
    (NodeAction::Unlock, capability::can_unlock),
    (NodeAction::Delete, capability::can_delete_node),
];

struct DisableRule {
    reason: fn(&NodeActionContext) -> Option<DisableReason>,
    affected: fn(&NodeActionContext) -> &'static [NodeAction],
}

/// Condition → affected actions.
const DISABLE_RULES: [DisableRule; 2] = [
    DisableRule {
        reason: liveness_reason,
        affected: liveness_affected,
    },
    DisableRule {
        reason: scripts_reason,
        affected: scripts_affected,
    },
];

/// Offline wins over any lifecycle reason.
fn liveness_reason(ctx: &NodeActionContext) -> Option<DisableReason> {
    if !ctx.is_online() {
        return Some(DisableReason::Offline);
    }
    DisableReason::from_lifecycle(ctx.lifecycle)
}

fn liveness_affected(_ctx: &NodeActionContext) -> &'static [NodeAction] {
    &[NodeAction::Query, NodeAction::MdmOff]
}

/// Unknown script support never disables anything.
fn scripts_reason(ctx: &NodeActionContext) -> Option<DisableReason> {
    ctx.scripts_enabled
        .is_explicitly_disabled()
        .then_some(DisableReason::ScriptsDisabled)
}

/// Linux lock/unlock/wipe run as scripts. Windows lock/unlock do too; Windows
/// wipe goes through MDM.
fn scripts_affected(ctx: &NodeActionContext) -> &'static [NodeAction] {
    if ctx.platform.is_linux_like() {
        &[
            NodeAction::RunScript,
            NodeAction::Lock,
            NodeAction::Unlock,
            NodeAction::Wipe,
        ]
    } else if ctx.platform == Platform::Windows {
        &[NodeAction::RunScript, NodeAction::Lock, NodeAction::Unlock]
    } else {
        &[NodeAction::RunScript]
    }
}

pub struct ActionEligibilityEngine;

impl ActionEligibilityEngine {
    /// Filter pass only: the applicable actions in canonical order.
    pub fn applicable_actions(ctx: &NodeActionContext) -> Vec<NodeAction> {
        ELIGIBILITY
            .iter()
            .filter(|(_, is_applicable)| is_applicable(ctx))
            .map(|(action, _)| *action)
            .collect()
    }

    /// The full menu for the node. Empty means "render nothing".
    pub fn evaluate(ctx: &NodeActionContext) -> Vec<ActionDescriptor> {
        let mut options: Vec<ActionDescriptor> = Self::applicable_actions(ctx)
            .into_iter()
            .map(ActionDescriptor::enabled)
            .collect();

        if options.is_empty() {
            return options;
        }

        for rule in &DISABLE_RULES {
            let Some(reason) = (rule.reason)(ctx) else {
                continue;
            };
            for action in (rule.affected)(ctx) {
                if let Some(option) = options.iter_mut().find(|o| o.value == *action) {
                    option.disable(disabled_tooltip(*action, reason));
                }
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::context::MdmContext;
    use crate::action::TooltipContent;
    use crate::lifecycle::DeviceLifecycleState;
    use crate::node::{NodeStatus, ScriptsEnabled};
    use crate::session::{ActorRoles, Role, SubscriptionTier};

    fn admin_ctx(platform: Platform) -> NodeActionContext {
        NodeActionContext {
            platform,
            tier: SubscriptionTier::Premium,
            roles: ActorRoles::Global(Role::Admin),
            status: NodeStatus::Online,
            mdm: MdmContext {
                enrolled: true,
                connected_to_own_mdm: true,
                mac_enabled_and_configured: true,
                windows_enabled_and_configured: true,
            },
            stores_encryption_key: true,
            scripts_enabled: ScriptsEnabled::Enabled,
            lifecycle: DeviceLifecycleState::Unlocked,
        }
    }

    fn values(options: &[ActionDescriptor]) -> Vec<NodeAction> {
        options.iter().map(|o| o.value).collect()
    }

    fn find(options: &[ActionDescriptor], action: NodeAction) -> &ActionDescriptor {
        options
            .iter()
            .find(|o| o.value == action)
            .unwrap_or_else(|| panic!("{action:?} missing from {options:?}"))
    }

    #[test]
    fn table_covers_every_action_in_order() {
        let actions: Vec<NodeAction> = ELIGIBILITY.iter().map(|(a, _)| *a).collect();
        assert_eq!(actions, NodeAction::ALL.to_vec());
    }

    #[test]
    fn no_role_free_tier_on_ios_is_empty() {
        let mut ctx = admin_ctx(Platform::Ios);
        ctx.roles = ActorRoles::NoRole;
        ctx.tier = SubscriptionTier::Free;

        assert!(ActionEligibilityEngine::evaluate(&ctx).is_empty());
    }

    #[test]
    fn locked_linux_node_offers_unlock_and_disables_query() {
        let mut ctx = admin_ctx(Platform::Ubuntu);
        ctx.lifecycle = DeviceLifecycleState::Locked;

        let options = ActionEligibilityEngine::evaluate(&ctx);

        assert_eq!(
            values(&options),
            vec![
                NodeAction::Transfer,
                NodeAction::Query,
                NodeAction::RunScript,
                NodeAction::DiskEncryption,
                NodeAction::Unlock,
                NodeAction::Delete,
            ]
        );
        let query = find(&options, NodeAction::Query);
        assert!(query.disabled);
        assert_eq!(
            query.tooltip_content,
            Some(TooltipContent::single("You can't query a locked node."))
        );
        assert!(!find(&options, NodeAction::Unlock).disabled);
    }

    #[test]
    fn scripts_disabled_on_linux_disables_wipe_too() {
        let mut ctx = admin_ctx(Platform::Rhel);
        ctx.scripts_enabled = ScriptsEnabled::Disabled;

        let options = ActionEligibilityEngine::evaluate(&ctx);

        for action in [NodeAction::RunScript, NodeAction::Lock, NodeAction::Wipe] {
            assert!(find(&options, action).disabled, "{action:?}");
        }
        assert!(!find(&options, NodeAction::Query).disabled);
        assert!(!find(&options, NodeAction::Delete).disabled);
    }

    #[test]
    fn scripts_disabled_on_darwin_only_disables_run_script() {
        let mut ctx = admin_ctx(Platform::Darwin);
        ctx.scripts_enabled = ScriptsEnabled::Disabled;

        let options = ActionEligibilityEngine::evaluate(&ctx);

        let disabled: Vec<NodeAction> = options
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.value)
            .collect();
        assert_eq!(disabled, vec![NodeAction::RunScript]);
    }

    #[test]
    fn offline_tooltip_beats_lifecycle_tooltip() {
        let mut ctx = admin_ctx(Platform::Darwin);
        ctx.status = NodeStatus::Offline;
        ctx.lifecycle = DeviceLifecycleState::Locking;

        let options = ActionEligibilityEngine::evaluate(&ctx);

        assert_eq!(
            find(&options, NodeAction::Query).tooltip_content,
            Some(TooltipContent::single("You can't query an offline node."))
        );
    }
}
