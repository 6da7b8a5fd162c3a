use super::{NodeAction, TooltipContent};
use crate::lifecycle::DeviceLifecycleState;

/// Why an applicable action is shown disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisableReason {
    Offline,
    Locked,
    Wiped,
    LockPending,
    UnlockPending,
    WipePending,
    ScriptsDisabled,
}

impl DisableReason {
    /// `None` for `Unlocked`.
    pub fn from_lifecycle(state: DeviceLifecycleState) -> Option<Self> {
        match state {
            DeviceLifecycleState::Unlocked => None,
            DeviceLifecycleState::Locked => Some(DisableReason::Locked),
            DeviceLifecycleState::Wiped => Some(DisableReason::Wiped),
            DeviceLifecycleState::Locking => Some(DisableReason::LockPending),
            DeviceLifecycleState::Unlocking => Some(DisableReason::UnlockPending),
            DeviceLifecycleState::Wiping => Some(DisableReason::WipePending),
        }
    }
}

fn verb_phrase(action: NodeAction) -> &'static str {
    match action {
        NodeAction::Transfer => "transfer",
        NodeAction::Query => "query",
        NodeAction::RunScript => "run scripts on",
        NodeAction::DiskEncryption => "show the disk encryption key of",
        NodeAction::MdmOff => "turn off MDM on",
        NodeAction::Lock => "lock",
        NodeAction::Wipe => "wipe",
        NodeAction::Unlock => "unlock",
        NodeAction::Delete => "delete",
    }
}

pub fn disabled_tooltip(action: NodeAction, reason: DisableReason) -> TooltipContent {
    let verb = verb_phrase(action);
    let subject = match reason {
        DisableReason::ScriptsDisabled => {
            return TooltipContent::from_lines([
                format!("To {verb} this node, deploy the"),
                "agent with --enable-scripts and refetch".to_string(),
                "node vitals".to_string(),
            ]);
        }
        DisableReason::Offline => "an offline node",
        DisableReason::Locked => "a locked node",
        DisableReason::Wiped => "a wiped node",
        DisableReason::LockPending => "a node with a pending lock",
        DisableReason::UnlockPending => "a node with a pending unlock",
        DisableReason::WipePending => "a node with a pending wipe",
    };
    TooltipContent::single(format!("You can't {verb} {subject}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_query_message() {
        assert_eq!(
            disabled_tooltip(NodeAction::Query, DisableReason::Offline),
            TooltipContent::single("You can't query an offline node.")
        );
    }

    #[test]
    fn scripts_message_names_the_action() {
        let tooltip = disabled_tooltip(NodeAction::RunScript, DisableReason::ScriptsDisabled);
        assert_eq!(
            tooltip.lines(),
            [
                "To run scripts on this node, deploy the",
                "agent with --enable-scripts and refetch",
                "node vitals",
            ]
        );

        let tooltip = disabled_tooltip(NodeAction::Wipe, DisableReason::ScriptsDisabled);
        assert_eq!(tooltip.lines()[0], "To wipe this node, deploy the");
    }

    #[test]
    fn lifecycle_message_names_the_state() {
        assert_eq!(
            disabled_tooltip(NodeAction::MdmOff, DisableReason::LockPending).to_string(),
            "You can't turn off MDM on a node with a pending lock."
        );
    }

    #[test]
    fn unlocked_is_not_a_reason() {
        assert_eq!(
            DisableReason::from_lifecycle(DeviceLifecycleState::Unlocked),
            None
        );
        assert_eq!(
            DisableReason::from_lifecycle(DeviceLifecycleState::Wiping),
            Some(DisableReason::WipePending)
        );
    }
}
