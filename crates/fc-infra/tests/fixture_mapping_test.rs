//! Server payloads flow through the wire mapping into the action engine.

use fc_core::lifecycle::DeviceLifecycleState;
use fc_core::{
    ActionEligibilityEngine, NodeAction, NodeActionContext, Session, SubscriptionTier,
};
use fc_core::node::MdmConfig;
use fc_infra::{NodeDetailDto, UserDto};

fn context_for(node_json: &str, user_json: &str, tier: SubscriptionTier) -> NodeActionContext {
    let node = NodeDetailDto::from_json(node_json).unwrap();
    let session = Session {
        user: UserDto::from_json(user_json).unwrap(),
        tier,
        mdm: MdmConfig {
            mac_enabled_and_configured: true,
            windows_enabled_and_configured: true,
        },
    };
    NodeActionContext::from_record(&node, &session)
}

#[test]
fn team_maintainer_on_own_team_gets_lock() {
    let ctx = context_for(
        r#"{"host": {"id": 1, "team_id": 7, "platform": "ubuntu", "status": "online"}}"#,
        r#"{"user": {"teams": [{"id": 7, "role": "maintainer"}]}}"#,
        SubscriptionTier::Premium,
    );

    let offered: Vec<_> = ActionEligibilityEngine::evaluate(&ctx)
        .into_iter()
        .map(|d| d.value)
        .collect();

    assert_eq!(ctx.lifecycle, DeviceLifecycleState::Unlocked);
    assert!(offered.contains(&NodeAction::Lock));
    assert!(offered.contains(&NodeAction::Wipe));
    assert!(!offered.contains(&NodeAction::Transfer));
}

#[test]
fn team_maintainer_on_other_team_gets_read_only_menu() {
    let ctx = context_for(
        r#"{"host": {"id": 1, "team_id": 8, "platform": "ubuntu", "status": "online"}}"#,
        r#"{"user": {"teams": [{"id": 7, "role": "maintainer"}]}}"#,
        SubscriptionTier::Premium,
    );

    let offered: Vec<_> = ActionEligibilityEngine::evaluate(&ctx)
        .into_iter()
        .map(|d| d.value)
        .collect();

    assert_eq!(offered, vec![NodeAction::Query]);
}

#[test]
fn pending_wipe_on_the_wire_resolves_to_wiping() {
    let ctx = context_for(
        r#"{"id": 2, "platform": "windows", "status": "online",
            "mdm": {"device_status": "unlocked", "pending_action": "wipe"}}"#,
        r#"{"global_role": "admin"}"#,
        SubscriptionTier::Premium,
    );

    assert_eq!(ctx.lifecycle, DeviceLifecycleState::Wiping);
}
