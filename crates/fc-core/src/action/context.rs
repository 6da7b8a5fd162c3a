use serde::Serialize;

use crate::lifecycle::DeviceLifecycleState;
use crate::node::{NodeRecord, NodeStatus, Platform, ScriptsEnabled};
use crate::session::{ActorRoles, Session, SubscriptionTier};

/// MDM facts the predicates look at, flattened from the node and the server
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MdmContext {
    pub enrolled: bool,
    pub connected_to_own_mdm: bool,
    pub mac_enabled_and_configured: bool,
    pub windows_enabled_and_configured: bool,
}

/// Everything the action engine decides on, for one node and one actor.
///
/// Rebuilt on every render from the node record, the session and the
/// caller's lifecycle slot. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeActionContext {
    pub platform: Platform,
    pub tier: SubscriptionTier,
    pub roles: ActorRoles,
    pub status: NodeStatus,
    pub mdm: MdmContext,
    pub stores_encryption_key: bool,
    pub scripts_enabled: ScriptsEnabled,
    pub lifecycle: DeviceLifecycleState,
}

impl NodeActionContext {
    /// Context with the lifecycle state taken from the caller, which may be
    /// ahead of the node record after an optimistic transition.
    pub fn new(node: &NodeRecord, session: &Session, lifecycle: DeviceLifecycleState) -> Self {
        Self {
            platform: node.platform,
            tier: session.tier,
            roles: ActorRoles::for_node(&session.user, node.team_id),
            status: node.status,
            mdm: MdmContext {
                enrolled: node.mdm.enrollment_status.is_enrolled(),
                connected_to_own_mdm: node.mdm.connected_to_own_mdm,
                mac_enabled_and_configured: session.mdm.mac_enabled_and_configured,
                windows_enabled_and_configured: session.mdm.windows_enabled_and_configured,
            },
            stores_encryption_key: node.encryption_key_available,
            scripts_enabled: node.scripts_enabled,
            lifecycle,
        }
    }

    /// Context with the lifecycle state resolved from the record itself.
    pub fn from_record(node: &NodeRecord, session: &Session) -> Self {
        let lifecycle =
            DeviceLifecycleState::resolve(node.mdm.device_status, node.mdm.pending_action);
        Self::new(node, session, lifecycle)
    }

    pub fn is_premium(&self) -> bool {
        self.tier.is_premium()
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }

    /// This product's MDM is enabled for the node's platform family.
    pub fn is_mdm_enabled_for_platform(&self) -> bool {
        (self.platform.is_apple() && self.mdm.mac_enabled_and_configured)
            || (self.platform == Platform::Windows && self.mdm.windows_enabled_and_configured)
    }

    /// Darwin node enrolled in and connected to this product's MDM, with mac
    /// MDM configured on the server.
    pub fn is_darwin_managed_by_own_mdm(&self) -> bool {
        self.platform == Platform::Darwin
            && self.mdm.connected_to_own_mdm
            && self.mdm.mac_enabled_and_configured
            && self.mdm.enrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{NodeId, TeamId};
    use crate::node::{EnrollmentStatus, MdmConfig, MdmDeviceStatus, PendingAction};
    use crate::session::{ActingUser, Role};

    fn darwin_record() -> NodeRecord {
        let mut node = NodeRecord::new(NodeId::new(1), Platform::Darwin);
        node.team_id = Some(TeamId::new(4));
        node.status = NodeStatus::Online;
        node.mdm.enrollment_status = EnrollmentStatus::OnManual;
        node.mdm.connected_to_own_mdm = true;
        node.mdm.device_status = MdmDeviceStatus::Locked;
        node.mdm.pending_action = PendingAction::Unlock;
        node
    }

    #[test]
    fn from_record_resolves_lifecycle_and_roles() {
        let session = Session {
            user: ActingUser::team_member(TeamId::new(4), Role::Maintainer),
            tier: SubscriptionTier::Premium,
            mdm: MdmConfig {
                mac_enabled_and_configured: true,
                windows_enabled_and_configured: false,
            },
        };

        let ctx = NodeActionContext::from_record(&darwin_record(), &session);

        assert_eq!(ctx.lifecycle, DeviceLifecycleState::Unlocking);
        assert_eq!(ctx.roles, ActorRoles::Team(Role::Maintainer));
        assert!(ctx.mdm.enrolled);
        assert!(ctx.is_darwin_managed_by_own_mdm());
        assert!(ctx.is_mdm_enabled_for_platform());
    }

    #[test]
    fn caller_lifecycle_wins_over_record() {
        let ctx = NodeActionContext::new(
            &darwin_record(),
            &Session::default(),
            DeviceLifecycleState::Locked,
        );
        assert_eq!(ctx.lifecycle, DeviceLifecycleState::Locked);
    }

    #[test]
    fn windows_mdm_flag_only_applies_to_windows() {
        let mut ctx = NodeActionContext::from_record(&darwin_record(), &Session::default());
        ctx.mdm.windows_enabled_and_configured = true;
        assert!(!ctx.is_mdm_enabled_for_platform());

        ctx.platform = Platform::Windows;
        assert!(ctx.is_mdm_enabled_for_platform());
    }

    #[test]
    fn ios_uses_mac_mdm_flag() {
        let mut ctx = NodeActionContext::from_record(&darwin_record(), &Session::default());
        ctx.platform = Platform::Ipados;
        ctx.mdm.mac_enabled_and_configured = true;
        assert!(ctx.is_mdm_enabled_for_platform());
    }
}
