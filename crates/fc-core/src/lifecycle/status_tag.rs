use serde::Serialize;

use super::DeviceLifecycleState;

/// Badge shown next to a node whose lifecycle state is not `Unlocked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceStatusTag {
    pub title: &'static str,
    pub tooltip: &'static str,
}

impl DeviceStatusTag {
    pub fn for_state(state: DeviceLifecycleState) -> Option<Self> {
        let tag = match state {
            DeviceLifecycleState::Unlocked => return None,
            DeviceLifecycleState::Locked => DeviceStatusTag {
                title: "LOCKED",
                tooltip: "Node is locked. The end user can't use the node until the node has been unlocked.",
            },
            DeviceLifecycleState::Unlocking => DeviceStatusTag {
                title: "UNLOCK PENDING",
                tooltip: "Node will unlock when it comes online. If the node is online, it will unlock the next time it checks in.",
            },
            DeviceLifecycleState::Locking => DeviceStatusTag {
                title: "LOCK PENDING",
                tooltip: "Node will lock when it comes online. If the node is online, it will lock the next time it checks in.",
            },
            DeviceLifecycleState::Wiped => DeviceStatusTag {
                title: "WIPED",
                tooltip: "Node is wiped. To prevent the node from automatically re-enrolling, delete it.",
            },
            DeviceLifecycleState::Wiping => DeviceStatusTag {
                title: "WIPE PENDING",
                tooltip: "Node will wipe when it comes online. If the node is online, it will wipe the next time it checks in.",
            },
        };
        Some(tag)
    }
}
