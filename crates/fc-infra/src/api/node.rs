use serde::Deserialize;
use tracing::debug;

use fc_core::node::{
    EnrollmentStatus, MdmDeviceStatus, NodeMdm, NodeStatus, PendingAction, Platform,
};
use fc_core::{NodeId, NodeRecord, ScriptsEnabled, TeamId};

#[derive(Debug, thiserror::Error)]
pub enum RecordMappingError {
    #[error("node detail has no id")]
    MissingId,
    #[error("node detail is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeMdmDto {
    pub enrollment_status: Option<String>,
    pub connected_to_fleet: Option<bool>,
    pub device_status: Option<String>,
    pub pending_action: Option<String>,
    pub encryption_key_available: Option<bool>,
}

/// Node detail as the server sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeDetailDto {
    pub id: Option<u32>,
    pub team_id: Option<u32>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub mdm: Option<NodeMdmDto>,
    pub scripts_enabled: Option<bool>,
    pub refetch_requested: Option<bool>,
}

impl NodeDetailDto {
    /// Accepts the `{"host": {...}}` envelope the detail endpoint sends as
    /// well as a bare record.
    pub fn from_json(json: &str) -> Result<NodeRecord, RecordMappingError> {
        let body = super::unwrap_envelope(serde_json::from_str(json)?, &["host", "node"]);
        serde_json::from_value::<NodeDetailDto>(body)?.into_record()
    }

    pub fn into_record(self) -> Result<NodeRecord, RecordMappingError> {
        let id = NodeId::new(self.id.ok_or(RecordMappingError::MissingId)?);

        let platform = match self.platform.as_deref() {
            Some(name) => Platform::from_api(name),
            None => {
                debug!(%id, "node detail has no platform");
                Platform::Unknown
            }
        };

        let mdm_dto = self.mdm.unwrap_or_default();
        let mdm = NodeMdm {
            enrollment_status: EnrollmentStatus::from_api(mdm_dto.enrollment_status.as_deref()),
            connected_to_own_mdm: mdm_dto.connected_to_fleet.unwrap_or(false),
            device_status: MdmDeviceStatus::from_api(mdm_dto.device_status.as_deref()),
            pending_action: PendingAction::from_api(mdm_dto.pending_action.as_deref()),
        };

        Ok(NodeRecord {
            id,
            team_id: self.team_id.map(TeamId::new),
            platform,
            status: NodeStatus::from_api(self.status.as_deref()),
            mdm,
            scripts_enabled: ScriptsEnabled::from(self.scripts_enabled),
            encryption_key_available: mdm_dto.encryption_key_available.unwrap_or(false),
            refetch_requested: self.refetch_requested.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wrapped_detail() {
        let json = r#"{
            "host": {
                "id": 12,
                "team_id": 3,
                "platform": "darwin",
                "status": "online",
                "scripts_enabled": true,
                "mdm": {
                    "enrollment_status": "On (automatic)",
                    "connected_to_fleet": true,
                    "device_status": "locked",
                    "pending_action": "unlock",
                    "encryption_key_available": true
                }
            }
        }"#;

        let node = NodeDetailDto::from_json(json).unwrap();

        assert_eq!(node.id, NodeId::new(12));
        assert_eq!(node.team_id, Some(TeamId::new(3)));
        assert_eq!(node.platform, Platform::Darwin);
        assert_eq!(node.status, NodeStatus::Online);
        assert_eq!(node.scripts_enabled, ScriptsEnabled::Enabled);
        assert_eq!(node.mdm.enrollment_status, EnrollmentStatus::OnAutomatic);
        assert!(node.mdm.connected_to_own_mdm);
        assert_eq!(node.mdm.device_status, MdmDeviceStatus::Locked);
        assert_eq!(node.mdm.pending_action, PendingAction::Unlock);
        assert!(node.encryption_key_available);
    }

    #[test]
    fn missing_facts_are_restrictive() {
        let node = NodeDetailDto::from_json(r#"{"id": 5}"#).unwrap();

        assert_eq!(node.platform, Platform::Unknown);
        assert_eq!(node.status, NodeStatus::Offline);
        assert_eq!(node.team_id, None);
        assert_eq!(node.mdm, NodeMdm::default());
        assert!(!node.encryption_key_available);
        assert!(!node.refetch_requested);
    }

    #[test]
    fn missing_scripts_flag_stays_unknown() {
        let node = NodeDetailDto::from_json(r#"{"id": 5, "scripts_enabled": null}"#).unwrap();
        assert_eq!(node.scripts_enabled, ScriptsEnabled::Unknown);
    }

    #[test]
    fn other_linux_distributions_map_to_linux() {
        let node = NodeDetailDto::from_json(r#"{"id": 5, "platform": "arch"}"#).unwrap();
        assert_eq!(node.platform, Platform::Linux);
    }

    #[test]
    fn missing_id_is_an_error() {
        let result = NodeDetailDto::from_json(r#"{"platform": "windows"}"#);
        assert!(matches!(result, Err(RecordMappingError::MissingId)));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let result = NodeDetailDto::from_json("not json");
        assert!(matches!(result, Err(RecordMappingError::Json(_))));
    }

    #[test]
    fn bad_field_inside_envelope_is_a_json_error() {
        let result = NodeDetailDto::from_json(r#"{"host": {"id": 4, "team_id": "seven"}}"#);
        assert!(matches!(result, Err(RecordMappingError::Json(_))));
    }

    #[test]
    fn node_key_is_accepted_as_envelope() {
        let node = NodeDetailDto::from_json(r#"{"node": {"id": 9, "platform": "rhel"}}"#).unwrap();
        assert_eq!(node.id, NodeId::new(9));
        assert_eq!(node.platform, Platform::Rhel);
    }
}
