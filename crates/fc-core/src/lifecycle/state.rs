use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::node::{MdmDeviceStatus, PendingAction};

/// Lock/wipe state of a node as the console shows it.
///
/// ```text
/// Unlocked ──lock──→ Locking ──(device confirms)──→ Locked
///    ↑                                                │
///    └──(device confirms)── Unlocking ←──unlock───────┘
///
/// Unlocked ──wipe──→ Wiping ──(device confirms)──→ Wiped
/// ```
///
/// `Wiping` and `Wiped` never lead back to the unlocked family.
///
/// On darwin `Unlocking` means the unlock PIN has been revealed at least
/// once, not that an unlock command is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceLifecycleState {
    #[default]
    Unlocked,
    Locked,
    Unlocking,
    Locking,
    Wiped,
    Wiping,
}

impl DeviceLifecycleState {
    pub const ALL: [DeviceLifecycleState; 6] = [
        DeviceLifecycleState::Unlocked,
        DeviceLifecycleState::Locked,
        DeviceLifecycleState::Unlocking,
        DeviceLifecycleState::Locking,
        DeviceLifecycleState::Wiped,
        DeviceLifecycleState::Wiping,
    ];

    /// Derive the state from what the server reports.
    ///
    /// A pending action overrides the confirmed device status: the server
    /// has accepted the command but the device has not executed it yet.
    pub fn resolve(device_status: MdmDeviceStatus, pending_action: PendingAction) -> Self {
        match pending_action {
            PendingAction::Unlock => DeviceLifecycleState::Unlocking,
            PendingAction::Lock => DeviceLifecycleState::Locking,
            PendingAction::Wipe => DeviceLifecycleState::Wiping,
            PendingAction::None => match device_status {
                MdmDeviceStatus::Unlocked => DeviceLifecycleState::Unlocked,
                MdmDeviceStatus::Locked => DeviceLifecycleState::Locked,
                MdmDeviceStatus::Wiped => DeviceLifecycleState::Wiped,
            },
        }
    }

    /// A command is pending on the device.
    pub fn is_updating(self) -> bool {
        matches!(
            self,
            DeviceLifecycleState::Unlocking
                | DeviceLifecycleState::Locking
                | DeviceLifecycleState::Wiping
        )
    }

    /// Wipe was issued or confirmed; no UI transition leaves this family.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DeviceLifecycleState::Wiped | DeviceLifecycleState::Wiping
        )
    }
}

impl Display for DeviceLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceLifecycleState::Unlocked => write!(f, "unlocked"),
            DeviceLifecycleState::Locked => write!(f, "locked"),
            DeviceLifecycleState::Unlocking => write!(f, "unlocking"),
            DeviceLifecycleState::Locking => write!(f, "locking"),
            DeviceLifecycleState::Wiped => write!(f, "wiped"),
            DeviceLifecycleState::Wiping => write!(f, "wiping"),
        }
    }
}
