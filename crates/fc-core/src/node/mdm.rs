//! MDM facts reported for a node and the server-wide MDM configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// `mdm.enrollment_status` as reported by the node-detail API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    OnAutomatic,
    OnManual,
    Pending,
    #[default]
    Off,
}

impl EnrollmentStatus {
    /// Unrecognized and missing values map to `Off`.
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("On (automatic)") => EnrollmentStatus::OnAutomatic,
            Some("On (manual)") => EnrollmentStatus::OnManual,
            Some("Pending") => EnrollmentStatus::Pending,
            Some("Off") | None => EnrollmentStatus::Off,
            Some(other) => {
                debug!(enrollment_status = other, "unrecognized enrollment status, treating as off");
                EnrollmentStatus::Off
            }
        }
    }

    pub fn is_enrolled(self) -> bool {
        matches!(
            self,
            EnrollmentStatus::OnAutomatic | EnrollmentStatus::OnManual
        )
    }
}

/// `mdm.device_status`: the last lock/wipe state confirmed by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MdmDeviceStatus {
    #[default]
    Unlocked,
    Locked,
    Wiped,
}

impl MdmDeviceStatus {
    pub const ALL: [MdmDeviceStatus; 3] = [
        MdmDeviceStatus::Unlocked,
        MdmDeviceStatus::Locked,
        MdmDeviceStatus::Wiped,
    ];

    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("locked") => MdmDeviceStatus::Locked,
            Some("wiped") => MdmDeviceStatus::Wiped,
            Some("unlocked") | None => MdmDeviceStatus::Unlocked,
            Some(other) => {
                debug!(device_status = other, "unrecognized device status, treating as unlocked");
                MdmDeviceStatus::Unlocked
            }
        }
    }
}

/// `mdm.pending_action`: a command accepted by the server that the device has
/// not executed yet. The API reports the empty string for "nothing pending".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PendingAction {
    #[default]
    None,
    Lock,
    Unlock,
    Wipe,
}

impl PendingAction {
    pub const ALL: [PendingAction; 4] = [
        PendingAction::None,
        PendingAction::Lock,
        PendingAction::Unlock,
        PendingAction::Wipe,
    ];

    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("lock") => PendingAction::Lock,
            Some("unlock") => PendingAction::Unlock,
            Some("wipe") => PendingAction::Wipe,
            Some("") | None => PendingAction::None,
            Some(other) => {
                debug!(pending_action = other, "unrecognized pending action, ignoring");
                PendingAction::None
            }
        }
    }
}

/// MDM facts of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeMdm {
    pub enrollment_status: EnrollmentStatus,
    /// Enrolled in this product's own MDM, as opposed to a third-party MDM.
    pub connected_to_own_mdm: bool,
    pub device_status: MdmDeviceStatus,
    pub pending_action: PendingAction,
}

/// Server-wide MDM capability toggles, independent of any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MdmConfig {
    pub mac_enabled_and_configured: bool,
    pub windows_enabled_and_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_on_statuses_count_as_enrolled() {
        assert!(EnrollmentStatus::from_api(Some("On (automatic)")).is_enrolled());
        assert!(EnrollmentStatus::from_api(Some("On (manual)")).is_enrolled());
        assert!(!EnrollmentStatus::from_api(Some("Pending")).is_enrolled());
        assert!(!EnrollmentStatus::from_api(Some("Off")).is_enrolled());
        assert!(!EnrollmentStatus::from_api(Some("On (personal)")).is_enrolled());
        assert!(!EnrollmentStatus::from_api(None).is_enrolled());
    }

    #[test]
    fn empty_pending_action_is_none() {
        assert_eq!(PendingAction::from_api(Some("")), PendingAction::None);
        assert_eq!(PendingAction::from_api(None), PendingAction::None);
        assert_eq!(PendingAction::from_api(Some("wipe")), PendingAction::Wipe);
    }

    #[test]
    fn device_status_defaults_to_unlocked() {
        assert_eq!(MdmDeviceStatus::from_api(None), MdmDeviceStatus::Unlocked);
        assert_eq!(
            MdmDeviceStatus::from_api(Some("locked")),
            MdmDeviceStatus::Locked
        );
    }
}
